// src/extract.rs
//! Converts Notion property values into display strings.
//!
//! Extraction is pure and total: every property value maps to an ordered,
//! possibly empty list of non-empty strings. Absent, `null` and blank
//! content contributes nothing, and unknown property types are not errors.

use crate::constants::{DATE_RANGE_SEPARATOR, PERSON_NAME_SEPARATOR};
use crate::model::{
    DateValue, FormulaValue, PropertyTypeValue, PropertyValue, RelationRef, RichText, RollupValue,
    SelectOption, User,
};

// --- Main Extraction Entry Point ---

/// Extracts the display strings of a property value.
pub fn extract_strings(value: &PropertyValue) -> Vec<String> {
    use PropertyTypeValue as P;

    match &value.type_specific_value {
        P::Title { title } => extract_rich_text(title).into_iter().collect(),
        P::RichText { rich_text } => extract_rich_text(rich_text).into_iter().collect(),
        P::Select { select } => extract_option(select.as_ref()).into_iter().collect(),
        P::Status { status } => extract_option(status.as_ref()).into_iter().collect(),
        P::MultiSelect { multi_select } => extract_multi_select(multi_select),
        P::People { people } => extract_people(people),
        P::Email { email } => non_empty(email.as_deref()).into_iter().collect(),
        P::Url { url } => non_empty(url.as_deref()).into_iter().collect(),
        P::PhoneNumber { phone_number } => non_empty(phone_number.as_deref()).into_iter().collect(),
        P::Number { number } => number.map(format_number).into_iter().collect(),
        P::Checkbox { checkbox } => checkbox.map(format_bool).into_iter().collect(),
        P::Date { date } => extract_date(date.as_ref()).into_iter().collect(),
        P::Relation { relation } => extract_relation(relation),
        P::Formula { formula } => formula.as_ref().map(extract_formula).unwrap_or_default(),
        P::Rollup { rollup } => rollup.as_ref().map(extract_rollup).unwrap_or_default(),
        P::Unsupported => Vec::new(),
    }
}

/// Extracts a property value as one piece of text.
///
/// Title and rich text yield their concatenated plain text; any other type
/// yields its extracted strings joined with the person name separator, so
/// splitting the result gives the values back.
pub fn extract_text(value: &PropertyValue) -> String {
    match &value.type_specific_value {
        PropertyTypeValue::Title { title } => concat_rich_text(title),
        PropertyTypeValue::RichText { rich_text } => concat_rich_text(rich_text),
        _ => extract_strings(value).join(PERSON_NAME_SEPARATOR),
    }
}

// --- Text ---

fn concat_rich_text(fragments: &[RichText]) -> String {
    fragments
        .iter()
        .map(|fragment| fragment.plain_text.as_str())
        .collect::<String>()
        .trim()
        .to_string()
}

fn extract_rich_text(fragments: &[RichText]) -> Option<String> {
    let text = concat_rich_text(fragments);
    (!text.is_empty()).then_some(text)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}

// --- Options ---

fn extract_option(option: Option<&SelectOption>) -> Option<String> {
    non_empty(option.map(|o| o.name.as_str()))
}

fn extract_multi_select(options: &[SelectOption]) -> Vec<String> {
    options
        .iter()
        .filter(|o| !o.name.is_empty())
        .map(|o| o.name.clone())
        .collect()
}

// --- People and relations ---

fn extract_people(people: &[User]) -> Vec<String> {
    people
        .iter()
        .filter_map(|user| {
            non_empty(user.name.as_deref()).or_else(|| non_empty(Some(user.id.as_str())))
        })
        .collect()
}

fn extract_relation(relation: &[RelationRef]) -> Vec<String> {
    relation
        .iter()
        .filter(|r| !r.id.is_empty())
        .map(|r| r.id.as_str().to_string())
        .collect()
}

// --- Scalars ---

/// Shortest decimal that round-trips, never in exponent form.
fn format_number(n: f64) -> String {
    // `Display` for f64 already has both properties.
    n.to_string()
}

fn format_bool(b: bool) -> String {
    b.to_string()
}

fn extract_date(date: Option<&DateValue>) -> Option<String> {
    let date = date?;
    let start = non_empty(date.start.as_deref())?;
    match non_empty(date.end.as_deref()) {
        Some(end) => Some(format!("{}{}{}", start, DATE_RANGE_SEPARATOR, end)),
        None => Some(start),
    }
}

// --- Computed values ---

fn extract_formula(formula: &FormulaValue) -> Vec<String> {
    let value = match formula {
        FormulaValue::String { string } => non_empty(string.as_deref()),
        FormulaValue::Number { number } => number.map(format_number),
        FormulaValue::Boolean { boolean } => boolean.map(format_bool),
        FormulaValue::Date { date } => extract_date(date.as_ref()),
        FormulaValue::Unsupported => None,
    };
    value.into_iter().collect()
}

fn extract_rollup(rollup: &RollupValue) -> Vec<String> {
    match rollup {
        RollupValue::Number { number } => number.map(format_number).into_iter().collect(),
        RollupValue::Date { date } => extract_date(date.as_ref()).into_iter().collect(),
        RollupValue::Array { array } => array.iter().flat_map(extract_strings).collect(),
        RollupValue::Unsupported => Vec::new(),
    }
}
