use super::PropertyValue;
use crate::error::AppError;
use crate::types::{PageId, PropertyName};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A page as returned by queries and page endpoints.
///
/// Properties are keyed by their display name, in the order Notion sent them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    #[serde(default)]
    pub properties: IndexMap<String, PropertyValue>,
}

impl Page {
    pub fn new(id: PageId) -> Self {
        Self {
            id,
            properties: IndexMap::new(),
        }
    }

    pub fn with_property(mut self, name: &str, value: PropertyValue) -> Self {
        self.properties.insert(name.to_string(), value);
        self
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Looks up a property that every page of the run must carry.
    pub fn require_property(&self, name: &PropertyName) -> Result<&PropertyValue, AppError> {
        self.property(name.as_str())
            .ok_or_else(|| AppError::MissingProperty {
                property: name.as_str().to_string(),
                page_id: self.id.as_str().to_string(),
            })
    }
}
