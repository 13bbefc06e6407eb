use crate::constants::PERSON_NAME_SEPARATOR;

/// Splits a names property into trimmed person names.
///
/// Only the exact `", "` sequence separates names. Blank tokens are kept so
/// the result lines up with the source text; callers skip them.
pub fn split_person_names(text: &str) -> Vec<String> {
    text.split(PERSON_NAME_SEPARATOR)
        .map(|token| token.trim().to_string())
        .collect()
}
