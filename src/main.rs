// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion_tools::output::sink_for;
use notion_tools::{
    extract_values, link_people, AppError, CommandLineInput, NotionHttpClient, RunConfig, Task,
};
use std::fs;

/// Sets up logging configuration.
///
/// The console appender writes to stderr; stdout carries extracted values.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notion_tools.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(log_level)))
                .build("stderr", Box::new(stderr_appender)),
        )
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(LevelFilter::Debug),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Runs the configured task against the Notion API.
async fn execute(config: RunConfig) -> Result<(), AppError> {
    let client = NotionHttpClient::new(&config.api_key)?;

    match config.task {
        Task::Extract(extract) => {
            let stdout = std::io::stdout();
            let mut sink = sink_for(extract.mode, stdout.lock());
            extract_values(&client, &extract, sink.as_mut()).await?;
        }
        Task::LinkPeople(link) => {
            let stats = link_people(&client, &link).await?;
            println!(
                "✓ Linked {} of {} pages ({} people created, {} reused)",
                stats.pages_linked, stats.pages_scanned, stats.people_created, stats.people_reused
            );
        }
    }

    Ok(())
}

fn fatal(err: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    let cli = CommandLineInput::parse();

    if let Err(e) = setup_logging(cli.verbose) {
        fatal(e);
    }

    let config = RunConfig::resolve(cli).unwrap_or_else(|e| fatal(e));
    log::debug!("Resolved configuration: {:?}", config);

    if let Err(e) = execute(config).await {
        if let Some(code) = e.notion_code() {
            log::error!("Notion error code: {}", code);
        }
        fatal(e);
    }
}
