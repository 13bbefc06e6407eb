// src/pipeline.rs
//! The query pipeline: every page of a data source → one property → values.

use crate::api::types::QueryRequest;
use crate::api::{DataSourcePages, NotionRepository};
use crate::config::ExtractConfig;
use crate::error::AppError;
use crate::extract::extract_strings;
use crate::output::ValueSink;

/// What a completed extraction run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub requests_issued: u32,
    pub pages_scanned: usize,
    pub values_extracted: usize,
    pub lines_written: usize,
}

/// Walks every page of the configured data source and feeds the values of
/// the configured property to `sink`.
///
/// A page without the property aborts the run before any later page is
/// looked at. `sink.finish()` is only called once the traversal completed.
pub async fn extract_values(
    repository: &dyn NotionRepository,
    config: &ExtractConfig,
    sink: &mut dyn ValueSink,
) -> Result<ExtractionStats, AppError> {
    log::info!(
        "Extracting '{}' from data source {}",
        config.property,
        config.data_source
    );

    let template = QueryRequest::new(config.page_size).only_properties([&config.property]);
    let mut batches = DataSourcePages::new(repository, &config.data_source, template);
    let mut stats = ExtractionStats::default();

    while let Some(pages) = batches.next_batch().await? {
        for page in &pages {
            let value = page.require_property(&config.property)?;
            for extracted in extract_strings(value) {
                let extracted = extracted.trim();
                if extracted.is_empty() {
                    continue;
                }
                sink.accept(extracted.to_string())?;
                stats.values_extracted += 1;
            }
            stats.pages_scanned += 1;
        }
    }

    stats.requests_issued = batches.requests_issued();
    stats.lines_written = sink.finish()?;

    log::info!(
        "Scanned {} pages in {} requests: {} values, {} lines written",
        stats.pages_scanned,
        stats.requests_issued,
        stats.values_extracted,
        stats.lines_written
    );

    Ok(stats)
}
