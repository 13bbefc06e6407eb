// src/lib.rs
//! notion-tools library. Reads property values out of Notion data sources
//! and links pages to a People database.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `RunConfig`, `ExtractConfig`, `LinkPeopleConfig`
//! - **Domain model**: `Page`, `PropertyValue`, `PropertyTypeValue`, ...
//! - **Domain types**: `ApiKey`, `PageId`, `DatabaseId`, `DataSourceId`, `PropertyName`, `PageSize`
//! - **API client**: `NotionRepository`, `NotionHttpClient`, request/response types
//! - **Pipelines**: `extract_values`, `link_people`

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod model;
pub mod output;
pub mod people;
pub mod pipeline;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{
    CommandLineInput, ExtractConfig, LinkPeopleConfig, PeopleDatabase, RunConfig, Task,
};

// --- Domain Model ---
pub use crate::model::{
    DateValue, FormulaValue, Page, PropertyTypeValue, PropertyValue, RelationRef, RichText,
    RollupValue, SelectOption, User,
};

// --- Domain Types ---
pub use crate::types::{ApiKey, DataSourceId, DatabaseId, PageId, PageSize, PropertyName};

// --- API Client ---
pub use crate::api::types::{
    CreatePageRequest, PaginatedResponse, QueryRequest, QueryResponse, UpdatePageRequest,
};
pub use crate::api::{NotionHttpClient, NotionRepository};

// --- Extraction and Pipelines ---
pub use crate::extract::{extract_strings, extract_text};
pub use crate::output::{OutputMode, StreamingOutput, UniqueOutput, ValueSink};
pub use crate::people::{link_people, split_person_names, LinkStats};
pub use crate::pipeline::{extract_values, ExtractionStats};
