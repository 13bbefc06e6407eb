// src/config.rs
use crate::constants::{
    DATA_SOURCE_ENV_VAR, DEFAULT_PEOPLE_TITLE_PROPERTY, DEFAULT_RELATION_PROPERTY,
    DEFAULT_SOURCE_PROPERTY, NOTION_API_PAGE_SIZE, PEOPLE_DATABASE_ENV_VAR,
    PEOPLE_DATA_SOURCE_ENV_VAR, TOKEN_ENV_VAR,
};
use crate::error::AppError;
use crate::output::OutputMode;
use crate::types::{ApiKey, DataSourceId, DatabaseId, PageSize, PropertyName};
use clap::{Args, Parser, Subcommand};

/// Parsed command-line input, before validation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Notion integration token (or set NOTION_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the values of one property across every page of a data source
    Extract(ExtractArgs),
    /// Split a names property into People pages and relate each page to them
    LinkPeople(LinkPeopleArgs),
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Data source ID or URL (or set NOTION_DATA_SOURCE_ID)
    #[arg(long)]
    pub data_source: Option<String>,

    /// Property name to extract
    #[arg(long, default_value = DEFAULT_SOURCE_PROPERTY)]
    pub field: String,

    /// Print unique values only (sorted)
    #[arg(long, default_value_t = false)]
    pub unique: bool,

    /// Results requested per query (1-100)
    #[arg(long, default_value_t = NOTION_API_PAGE_SIZE)]
    pub page_size: u32,
}

#[derive(Args, Debug)]
pub struct LinkPeopleArgs {
    /// Data source ID or URL holding the pages to link (or set NOTION_DATA_SOURCE_ID)
    #[arg(long)]
    pub data_source: Option<String>,

    /// People database ID or URL, parent of created pages (or set NOTION_PEOPLE_DATABASE_ID)
    ///
    /// Pages are created with a `database_id` parent, which Notion only
    /// accepts for databases holding a single data source.
    #[arg(long)]
    pub people_database: Option<String>,

    /// People data source ID or URL, searched by title (or set NOTION_PEOPLE_DATA_SOURCE_ID)
    #[arg(long)]
    pub people_data_source: Option<String>,

    /// Property holding the comma-separated names
    #[arg(long, default_value = DEFAULT_SOURCE_PROPERTY)]
    pub field: String,

    /// Relation property rewritten with the People pages
    #[arg(long, default_value = DEFAULT_RELATION_PROPERTY)]
    pub relation: String,

    /// Title property of the People database
    #[arg(long, default_value = DEFAULT_PEOPLE_TITLE_PROPERTY)]
    pub people_title: String,

    /// Results requested per query (1-100)
    #[arg(long, default_value_t = NOTION_API_PAGE_SIZE)]
    pub page_size: u32,
}

/// Resolved run configuration, validated before any request is made.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub api_key: ApiKey,
    pub task: Task,
}

#[derive(Debug, Clone)]
pub enum Task {
    Extract(ExtractConfig),
    LinkPeople(LinkPeopleConfig),
}

/// Inputs of the query pipeline.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub data_source: DataSourceId,
    pub property: PropertyName,
    pub page_size: PageSize,
    pub mode: OutputMode,
}

/// Where person pages live and how they are titled.
#[derive(Debug, Clone)]
pub struct PeopleDatabase {
    pub database: DatabaseId,
    pub data_source: DataSourceId,
    pub title_property: PropertyName,
}

/// Inputs of the person upsert flow.
#[derive(Debug, Clone)]
pub struct LinkPeopleConfig {
    pub data_source: DataSourceId,
    pub source_property: PropertyName,
    pub relation_property: PropertyName,
    pub people: PeopleDatabase,
    pub page_size: PageSize,
}

impl RunConfig {
    /// Resolves a complete configuration from CLI input and the process environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        Self::resolve_with(cli, |name| std::env::var(name).ok())
    }

    /// Resolves with an explicit environment lookup.
    pub fn resolve_with<F>(cli: CommandLineInput, env: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = first_non_blank(cli.token, || env(TOKEN_ENV_VAR)).ok_or_else(|| {
            AppError::MissingConfiguration(format!(
                "missing token: pass --token or set {}",
                TOKEN_ENV_VAR
            ))
        })?;
        let api_key = ApiKey::new(token)?;

        let task = match cli.command {
            Command::Extract(args) => Task::Extract(ExtractConfig {
                data_source: DataSourceId::parse(&required(
                    args.data_source,
                    "--data-source",
                    DATA_SOURCE_ENV_VAR,
                    &env,
                )?)?,
                property: PropertyName::new(args.field)?,
                page_size: PageSize::new(args.page_size)?,
                mode: if args.unique {
                    OutputMode::Unique
                } else {
                    OutputMode::Stream
                },
            }),
            Command::LinkPeople(args) => Task::LinkPeople(LinkPeopleConfig {
                data_source: DataSourceId::parse(&required(
                    args.data_source,
                    "--data-source",
                    DATA_SOURCE_ENV_VAR,
                    &env,
                )?)?,
                source_property: PropertyName::new(args.field)?,
                relation_property: PropertyName::new(args.relation)?,
                people: PeopleDatabase {
                    database: DatabaseId::parse(&required(
                        args.people_database,
                        "--people-database",
                        PEOPLE_DATABASE_ENV_VAR,
                        &env,
                    )?)?,
                    data_source: DataSourceId::parse(&required(
                        args.people_data_source,
                        "--people-data-source",
                        PEOPLE_DATA_SOURCE_ENV_VAR,
                        &env,
                    )?)?,
                    title_property: PropertyName::new(args.people_title)?,
                },
                page_size: PageSize::new(args.page_size)?,
            }),
        };

        Ok(RunConfig { api_key, task })
    }
}

/// The flag value if it is non-blank, else the fallback if that is non-blank.
fn first_non_blank<F>(flag: Option<String>, fallback: F) -> Option<String>
where
    F: FnOnce() -> Option<String>,
{
    let non_blank = |value: String| {
        let trimmed = value.trim().to_string();
        (!trimmed.is_empty()).then_some(trimmed)
    };
    flag.and_then(non_blank).or_else(|| fallback().and_then(non_blank))
}

fn required<F>(
    flag: Option<String>,
    flag_name: &str,
    env_var: &str,
    env: &F,
) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    first_non_blank(flag, || env(env_var)).ok_or_else(|| {
        AppError::MissingConfiguration(format!("pass {} or set {}", flag_name, env_var))
    })
}
