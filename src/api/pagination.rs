// src/api/pagination.rs
//! Cursor-driven traversal of a data source query.

use super::types::{PaginatedResponse, QueryRequest};
use super::NotionRepository;
use crate::error::AppError;
use crate::model::Page;
use crate::types::DataSourceId;

/// Where the next query should start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCursor {
    Start,
    Next(String),
    Done,
}

impl PageCursor {
    pub fn start_cursor(&self) -> Option<&str> {
        match self {
            PageCursor::Next(cursor) => Some(cursor),
            PageCursor::Start | PageCursor::Done => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, PageCursor::Done)
    }

    /// Moves past a response. Traversal continues only while the response
    /// reports more results and hands back a non-empty cursor.
    pub fn advance<T>(self, response: &PaginatedResponse<T>) -> Self {
        match (response.has_more, response.next_cursor.as_deref()) {
            (true, Some(cursor)) if !cursor.is_empty() => PageCursor::Next(cursor.to_string()),
            (true, _) => {
                log::warn!("Response reported more results without a next cursor; stopping");
                PageCursor::Done
            }
            (false, _) => PageCursor::Done,
        }
    }
}

/// Streams the pages of a data source one response at a time.
///
/// Each call to [`DataSourcePages::next_batch`] issues exactly one query, so
/// callers finish processing a batch before the next request goes out.
pub struct DataSourcePages<'a> {
    repository: &'a dyn NotionRepository,
    data_source: &'a DataSourceId,
    template: QueryRequest,
    cursor: PageCursor,
    requests_issued: u32,
}

impl<'a> DataSourcePages<'a> {
    pub fn new(
        repository: &'a dyn NotionRepository,
        data_source: &'a DataSourceId,
        template: QueryRequest,
    ) -> Self {
        Self {
            repository,
            data_source,
            template,
            cursor: PageCursor::Start,
            requests_issued: 0,
        }
    }

    /// Fetches the next batch, or `None` once the data source is exhausted.
    pub async fn next_batch(&mut self) -> Result<Option<Vec<Page>>, AppError> {
        if self.cursor.is_done() {
            return Ok(None);
        }

        let request = self
            .template
            .clone()
            .starting_at(self.cursor.start_cursor());
        let response = self
            .repository
            .query_data_source(self.data_source, &request)
            .await?;
        self.requests_issued += 1;

        log::debug!(
            "Query #{} on {} returned {} pages (has_more: {})",
            self.requests_issued,
            self.data_source,
            response.results.len(),
            response.has_more
        );

        let cursor = std::mem::replace(&mut self.cursor, PageCursor::Done);
        self.cursor = cursor.advance(&response);
        Ok(Some(response.results))
    }

    pub fn requests_issued(&self) -> u32 {
        self.requests_issued
    }
}
