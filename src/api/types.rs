// src/api/types.rs
//! Request and response bodies exchanged with the Notion API.

use crate::model::{Page, RelationRef};
use crate::types::{DatabaseId, PageId, PageSize, PropertyName};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// --- Query ---

/// Body of `POST /data_sources/{id}/query`.
///
/// `filter_properties` is not part of the body; the client sends it as
/// repeated `filter_properties[]` query parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRequest {
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<QueryFilter>,
    #[serde(skip)]
    pub filter_properties: Vec<String>,
}

impl QueryRequest {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size: page_size.get(),
            start_cursor: None,
            filter: None,
            filter_properties: Vec::new(),
        }
    }

    pub fn starting_at(mut self, cursor: Option<&str>) -> Self {
        self.start_cursor = cursor.map(str::to_string);
        self
    }

    pub fn with_filter(mut self, filter: QueryFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Narrows returned pages to the named properties.
    pub fn only_properties<'a>(mut self, names: impl IntoIterator<Item = &'a PropertyName>) -> Self {
        self.filter_properties = names
            .into_iter()
            .map(|name| name.as_str().to_string())
            .collect();
        self
    }
}

/// A single-property filter: `{"property": "Name", "title": {"equals": "Ada"}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryFilter {
    pub property: String,
    pub title: TextCondition,
}

impl QueryFilter {
    pub fn title_equals(property: &PropertyName, value: &str) -> Self {
        Self {
            property: property.as_str().to_string(),
            title: TextCondition {
                equals: value.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextCondition {
    pub equals: String,
}

/// Generic paginated response from Notion API.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub object: String,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// Response of a data source query.
pub type QueryResponse = PaginatedResponse<Page>;

// --- Page writes ---

/// Body of `POST /pages`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePageRequest {
    pub parent: PageParent,
    pub properties: IndexMap<String, PropertyWrite>,
}

impl CreatePageRequest {
    /// A page in `database` whose title property holds `title`.
    pub fn titled(database: &DatabaseId, title_property: &PropertyName, title: &str) -> Self {
        let mut properties = IndexMap::new();
        properties.insert(
            title_property.as_str().to_string(),
            PropertyWrite::Title {
                title: vec![TextWrite::new(title)],
            },
        );
        Self {
            parent: PageParent::DatabaseId {
                database_id: database.clone(),
            },
            properties,
        }
    }
}

/// Body of `PATCH /pages/{id}`. Properties not named are left untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePageRequest {
    pub properties: IndexMap<String, PropertyWrite>,
}

impl UpdatePageRequest {
    /// Replaces the targets of a relation property with exactly `targets`.
    pub fn replace_relation(property: &PropertyName, targets: &[PageId]) -> Self {
        let relation = targets
            .iter()
            .map(|id| RelationRef { id: id.clone() })
            .collect();
        let mut properties = IndexMap::new();
        properties.insert(
            property.as_str().to_string(),
            PropertyWrite::Relation { relation },
        );
        Self { properties }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageParent {
    DatabaseId { database_id: DatabaseId },
}

/// Property payloads this tool writes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyWrite {
    Title { title: Vec<TextWrite> },
    Relation { relation: Vec<RelationRef> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextWrite {
    pub text: TextContent,
}

impl TextWrite {
    pub fn new(content: &str) -> Self {
        Self {
            text: TextContent {
                content: content.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextContent {
    pub content: String,
}
