use crate::types::PageId;
use serde::{Deserialize, Deserializer, Serialize};

/// Property value: wraps a typed value with its property ID.
///
/// Items nested in a rollup array carry no ID, hence the `Option`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub type_specific_value: PropertyTypeValue,
}

impl PropertyValue {
    pub fn new(type_specific_value: PropertyTypeValue) -> Self {
        Self {
            id: None,
            type_specific_value,
        }
    }

    /// Returns the Notion API type name for this property value.
    pub fn type_name(&self) -> &'static str {
        match &self.type_specific_value {
            PropertyTypeValue::Title { .. } => "title",
            PropertyTypeValue::RichText { .. } => "rich_text",
            PropertyTypeValue::Select { .. } => "select",
            PropertyTypeValue::Status { .. } => "status",
            PropertyTypeValue::MultiSelect { .. } => "multi_select",
            PropertyTypeValue::People { .. } => "people",
            PropertyTypeValue::Email { .. } => "email",
            PropertyTypeValue::Url { .. } => "url",
            PropertyTypeValue::PhoneNumber { .. } => "phone_number",
            PropertyTypeValue::Number { .. } => "number",
            PropertyTypeValue::Checkbox { .. } => "checkbox",
            PropertyTypeValue::Date { .. } => "date",
            PropertyTypeValue::Relation { .. } => "relation",
            PropertyTypeValue::Formula { .. } => "formula",
            PropertyTypeValue::Rollup { .. } => "rollup",
            PropertyTypeValue::Unsupported => "unsupported",
        }
    }
}

/// The payload of a property value, keyed by the `type` discriminator.
///
/// Each variant carries only the field named after its type. `null` or
/// missing payloads decode as empty, and types this tool does not read
/// (files, created_time, unique_id, ...) land in `Unsupported`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyTypeValue {
    Title {
        #[serde(default, deserialize_with = "null_as_default")]
        title: Vec<RichText>,
    },
    RichText {
        #[serde(default, deserialize_with = "null_as_default")]
        rich_text: Vec<RichText>,
    },
    Select {
        #[serde(default)]
        select: Option<SelectOption>,
    },
    Status {
        #[serde(default)]
        status: Option<SelectOption>,
    },
    MultiSelect {
        #[serde(default, deserialize_with = "null_as_default")]
        multi_select: Vec<SelectOption>,
    },
    People {
        #[serde(default, deserialize_with = "null_as_default")]
        people: Vec<User>,
    },
    Email {
        #[serde(default)]
        email: Option<String>,
    },
    Url {
        #[serde(default)]
        url: Option<String>,
    },
    PhoneNumber {
        #[serde(default)]
        phone_number: Option<String>,
    },
    Number {
        #[serde(default)]
        number: Option<f64>,
    },
    Checkbox {
        #[serde(default)]
        checkbox: Option<bool>,
    },
    Date {
        #[serde(default)]
        date: Option<DateValue>,
    },
    Relation {
        #[serde(default, deserialize_with = "null_as_default")]
        relation: Vec<RelationRef>,
    },
    Formula {
        #[serde(default)]
        formula: Option<FormulaValue>,
    },
    Rollup {
        #[serde(default)]
        rollup: Option<RollupValue>,
    },
    #[serde(other)]
    Unsupported,
}

/// Formula results are typed by their own discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormulaValue {
    String {
        #[serde(default)]
        string: Option<String>,
    },
    Number {
        #[serde(default)]
        number: Option<f64>,
    },
    Boolean {
        #[serde(default)]
        boolean: Option<bool>,
    },
    Date {
        #[serde(default)]
        date: Option<DateValue>,
    },
    #[serde(other)]
    Unsupported,
}

/// Rollup results; `array` holds one property value per related page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RollupValue {
    Number {
        #[serde(default)]
        number: Option<f64>,
    },
    Date {
        #[serde(default)]
        date: Option<DateValue>,
    },
    Array {
        #[serde(default, deserialize_with = "null_as_default")]
        array: Vec<PropertyValue>,
    },
    #[serde(other)]
    Unsupported,
}

/// A rich text fragment; only its rendered plain text is read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
}

impl RichText {
    pub fn plain_text(text: &str) -> Self {
        Self {
            plain_text: text.to_string(),
        }
    }
}

/// Select, status and multi-select option
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

impl SelectOption {
    pub fn named(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
        }
    }
}

/// User representation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Date value; `start` and `end` are kept as the API sends them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DateValue {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl DateValue {
    pub fn new(start: &str, end: Option<&str>) -> Self {
        Self {
            start: Some(start.to_string()),
            end: end.map(str::to_string),
        }
    }
}

/// Target of a relation, read from and written to relation properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRef {
    pub id: PageId,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
