// src/api/mod.rs
//! Notion API interaction: reading data sources and writing pages.
//!
//! Pipelines depend on the [`NotionRepository`] trait; the HTTP details live
//! in [`client`], response decoding in [`parser`].

pub mod client;
pub mod pagination;
pub mod parser;
pub mod types;

use crate::error::AppError;
use crate::model::Page;
use crate::types::{DataSourceId, PageId};
use types::{CreatePageRequest, QueryRequest, QueryResponse, UpdatePageRequest};

/// The ability to read and write pages in a Notion workspace.
///
/// Business logic depends on this trait, never on HTTP details.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// One page of results of `POST /data_sources/{id}/query`.
    async fn query_data_source(
        &self,
        data_source: &DataSourceId,
        request: &QueryRequest,
    ) -> Result<QueryResponse, AppError>;

    /// `POST /pages`
    async fn create_page(&self, request: &CreatePageRequest) -> Result<Page, AppError>;

    /// `PATCH /pages/{id}`
    async fn update_page(
        &self,
        page: &PageId,
        request: &UpdatePageRequest,
    ) -> Result<Page, AppError>;
}

pub use client::NotionHttpClient;
pub use pagination::{DataSourcePages, PageCursor};
