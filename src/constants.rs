// src/constants.rs
//! Domain constants that define the operational boundaries of the tool.
//!
//! Each constant is named for the domain concept it constrains. Reading them
//! should tell you how the tool talks to Notion and how it interprets what
//! comes back.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Base URL every endpoint path is appended to.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// API version sent in the `Notion-Version` header.
///
/// Data source endpoints only exist from this version on.
pub const NOTION_API_VERSION: &str = "2025-09-03";

/// How many pages the Notion API returns per query.
///
/// The Notion API maximum is 100, which is also the default here.
pub const NOTION_API_PAGE_SIZE: u32 = 100;

/// Upper bound accepted for a user-supplied page size.
pub const NOTION_API_MAX_PAGE_SIZE: u32 = 100;

/// Per-request timeout. There is no overall deadline for a run.
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// User agent reported to Notion.
pub const USER_AGENT: &str = concat!("notion-tools/", env!("CARGO_PKG_VERSION"));

/// Query parameter used to narrow query responses to named properties.
pub const FILTER_PROPERTIES_PARAM: &str = "filter_properties[]";

// ---------------------------------------------------------------------------
// Property conventions
// ---------------------------------------------------------------------------

/// Property extracted when no `--field` is given.
pub const DEFAULT_SOURCE_PROPERTY: &str = "Who";

/// Relation property on the source page that points at People pages.
pub const DEFAULT_RELATION_PROPERTY: &str = "People";

/// Title property of the People database.
pub const DEFAULT_PEOPLE_TITLE_PROPERTY: &str = "Name";

/// Separator between person names in the source property.
///
/// Matched literally: a name written as `"Bob,Carol"` stays one name.
pub const PERSON_NAME_SEPARATOR: &str = ", ";

/// Joins the start and end of a date range.
pub const DATE_RANGE_SEPARATOR: &str = " → ";

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

pub const TOKEN_ENV_VAR: &str = "NOTION_TOKEN";
pub const DATA_SOURCE_ENV_VAR: &str = "NOTION_DATA_SOURCE_ID";
pub const PEOPLE_DATABASE_ENV_VAR: &str = "NOTION_PEOPLE_DATABASE_ID";
pub const PEOPLE_DATA_SOURCE_ENV_VAR: &str = "NOTION_PEOPLE_DATA_SOURCE_ID";
