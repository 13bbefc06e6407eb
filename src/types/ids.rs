use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Strong typing for IDs with phantom types
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

// Manual impl so `T` does not need to be `Clone`.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::from_normalized(self.value.clone())
    }
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatabaseMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataSourceMarker;

/// Type aliases for specific ID types
pub type PageId = Id<PageMarker>;
pub type DatabaseId = Id<DatabaseMarker>;
pub type DataSourceId = Id<DataSourceMarker>;

impl<T> Id<T> {
    /// Parse user-supplied Notion ID formats (raw, dashed, URL) into a normalized ID
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = normalize_notion_id(input)?;
        Ok(Self::from_normalized(normalized))
    }

    /// Wrap an ID exactly as the API returned it.
    pub fn from_normalized(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _phantom: PhantomData,
        }
    }

    /// Get the ID as a string reference
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the ID with dashes for API calls
    pub fn to_dashed(&self) -> String {
        if self.value.len() == 32 && !self.value.contains('-') {
            format!(
                "{}-{}-{}-{}-{}",
                &self.value[0..8],
                &self.value[8..12],
                &self.value[12..16],
                &self.value[16..20],
                &self.value[20..32]
            )
        } else {
            self.value.clone()
        }
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(Self::from_normalized(value))
    }
}

/// Normalize various Notion ID formats into a consistent format
fn normalize_notion_id(input: &str) -> Result<String, ValidationError> {
    let input = input.trim();

    if input.starts_with("http://") || input.starts_with("https://") {
        if let Some(id) = extract_id_from_url(input) {
            return normalize_notion_id(&id);
        }
        return Err(ValidationError::InvalidId(format!(
            "Could not extract ID from URL: {}",
            input
        )));
    }

    let normalized = input.replace('-', "");

    // Notion IDs are 32 hex characters
    if normalized.len() != 32 {
        return Err(ValidationError::InvalidId(format!(
            "Invalid ID length: expected 32 characters, got {}",
            normalized.len()
        )));
    }

    if !normalized.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidId(
            "ID must contain only hexadecimal characters".to_string(),
        ));
    }

    Ok(normalized.to_lowercase())
}

/// Extract the trailing ID segment from a Notion URL.
///
/// Handles `https://www.notion.so/<workspace>/<Title>-<id>?v=<view>` and
/// `https://www.notion.so/<id>`; the view query string is ignored.
fn extract_id_from_url(input: &str) -> Option<String> {
    let parsed = url::Url::parse(input).ok()?;
    let segment = parsed.path_segments()?.filter(|s| !s.is_empty()).last()?;

    if let Some(pos) = segment.rfind('-') {
        let potential_id = &segment[pos + 1..];
        if potential_id.len() == 32 {
            return Some(potential_id.to_string());
        }
    }

    if segment.len() == 32 || (segment.len() == 36 && segment.contains('-')) {
        return Some(segment.to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parsing() {
        let id = DataSourceId::parse("550e8400e29b41d4a716446655440000").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");

        let id = DataSourceId::parse("dc70f391-ee49-4e69-9aad-52c6ac9b16c0").unwrap();
        assert_eq!(id.as_str(), "dc70f391ee494e699aad52c6ac9b16c0");
        assert_eq!(id.to_dashed(), "dc70f391-ee49-4e69-9aad-52c6ac9b16c0");

        let id = DatabaseId::parse(
            "https://www.notion.so/acme/People-6861df528fd14ac0934954d2e90fb015?v=abc",
        )
        .unwrap();
        assert_eq!(id.as_str(), "6861df528fd14ac0934954d2e90fb015");

        let id = DatabaseId::parse("https://www.notion.so/6861df528fd14ac0934954d2e90fb015/")
            .unwrap();
        assert_eq!(id.as_str(), "6861df528fd14ac0934954d2e90fb015");
    }

    #[test]
    fn test_invalid_ids() {
        assert!(PageId::parse("too-short").is_err());
        assert!(PageId::parse("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz").is_err());
        assert!(PageId::parse("").is_err());
        assert!(PageId::parse("https://www.notion.so/").is_err());
    }

    #[test]
    fn api_ids_are_kept_verbatim() {
        let id: PageId = serde_json::from_str(r#""59833787-2cf9-4fdf-8782-e53db20768a5""#).unwrap();
        assert_eq!(id.as_str(), "59833787-2cf9-4fdf-8782-e53db20768a5");

        let id: PageId = serde_json::from_str("null").unwrap();
        assert!(id.is_empty());
    }
}
