use crate::api::types::{CreatePageRequest, QueryFilter, QueryRequest};
use crate::api::NotionRepository;
use crate::config::PeopleDatabase;
use crate::error::AppError;
use crate::extract::extract_text;
use crate::types::{PageId, PageSize};

/// How a person name was resolved to a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Existing(PageId),
    Created(PageId),
}

impl Resolution {
    pub fn into_page_id(self) -> PageId {
        match self {
            Resolution::Existing(id) | Resolution::Created(id) => id,
        }
    }
}

/// Find-or-create access to the People database, keyed by exact title.
pub struct PeopleDirectory<'a> {
    repository: &'a dyn NotionRepository,
    people: &'a PeopleDatabase,
}

impl<'a> PeopleDirectory<'a> {
    pub fn new(repository: &'a dyn NotionRepository, people: &'a PeopleDatabase) -> Self {
        Self { repository, people }
    }

    /// Returns the page titled `name`, creating it when none exists.
    pub async fn resolve(&self, name: &str) -> Result<Resolution, AppError> {
        if let Some(id) = self.find(name).await? {
            log::debug!("Reusing person page {} for '{}'", id, name);
            return Ok(Resolution::Existing(id));
        }

        let request =
            CreatePageRequest::titled(&self.people.database, &self.people.title_property, name);
        let page = self.repository.create_page(&request).await?;
        log::info!("Created person page {} for '{}'", page.id, name);
        Ok(Resolution::Created(page.id))
    }

    /// Searches the People data source for a page titled exactly `name`.
    ///
    /// The server-side filter narrows candidates; the title is compared again
    /// here so only an exact match is reused.
    async fn find(&self, name: &str) -> Result<Option<PageId>, AppError> {
        let title_property = &self.people.title_property;
        let request = QueryRequest::new(PageSize::default())
            .with_filter(QueryFilter::title_equals(title_property, name))
            .only_properties([title_property]);

        let response = self
            .repository
            .query_data_source(&self.people.data_source, &request)
            .await?;

        Ok(response
            .results
            .into_iter()
            .find(|page| {
                page.property(title_property.as_str())
                    .is_some_and(|title| extract_text(title) == name)
            })
            .map(|page| page.id))
    }
}
