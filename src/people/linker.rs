use super::directory::{PeopleDirectory, Resolution};
use super::names::split_person_names;
use crate::api::types::{QueryRequest, UpdatePageRequest};
use crate::api::{DataSourcePages, NotionRepository};
use crate::config::LinkPeopleConfig;
use crate::error::AppError;
use crate::extract::extract_text;
use crate::model::Page;
use crate::types::PageId;

/// What a completed linking run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkStats {
    pub requests_issued: u32,
    pub pages_scanned: usize,
    pub pages_linked: usize,
    pub pages_skipped: usize,
    pub people_created: usize,
    pub people_reused: usize,
}

/// Relates every page of the configured data source to the People pages
/// named in its source property.
///
/// Pages are handled one at a time, each person lookup awaited in turn. The
/// relation is replaced, not merged; pages naming nobody are left untouched.
pub async fn link_people(
    repository: &dyn NotionRepository,
    config: &LinkPeopleConfig,
) -> Result<LinkStats, AppError> {
    log::info!(
        "Linking '{}' of data source {} to '{}' via '{}'",
        config.source_property,
        config.data_source,
        config.people.data_source,
        config.relation_property
    );

    let directory = PeopleDirectory::new(repository, &config.people);
    let template =
        QueryRequest::new(config.page_size).only_properties([&config.source_property]);
    let mut batches = DataSourcePages::new(repository, &config.data_source, template);
    let mut stats = LinkStats::default();

    while let Some(pages) = batches.next_batch().await? {
        for page in &pages {
            stats.pages_scanned += 1;

            let targets = resolve_people(&directory, page, config, &mut stats).await?;
            if targets.is_empty() {
                log::debug!("No names on page {}; relation left as is", page.id);
                stats.pages_skipped += 1;
                continue;
            }

            let update = UpdatePageRequest::replace_relation(&config.relation_property, &targets);
            repository.update_page(&page.id, &update).await?;
            log::debug!("Linked page {} to {} people", page.id, targets.len());
            stats.pages_linked += 1;
        }
    }

    stats.requests_issued = batches.requests_issued();

    log::info!(
        "Scanned {} pages: {} linked, {} skipped; {} people created, {} reused",
        stats.pages_scanned,
        stats.pages_linked,
        stats.pages_skipped,
        stats.people_created,
        stats.people_reused
    );

    Ok(stats)
}

/// Page ids for the names on `page`, in name order, duplicates included.
async fn resolve_people(
    directory: &PeopleDirectory<'_>,
    page: &Page,
    config: &LinkPeopleConfig,
    stats: &mut LinkStats,
) -> Result<Vec<PageId>, AppError> {
    let value = page.require_property(&config.source_property)?;
    let names = split_person_names(&extract_text(value));

    let mut targets = Vec::with_capacity(names.len());
    for name in names.iter().filter(|name| !name.is_empty()) {
        let resolution = directory.resolve(name).await?;
        match resolution {
            Resolution::Existing(_) => stats.people_reused += 1,
            Resolution::Created(_) => stats.people_created += 1,
        }
        targets.push(resolution.into_page_id());
    }
    Ok(targets)
}
