use validator::{ValidationError, ValidationErrors};

pub mod combined;
pub mod meta;
pub mod text;
pub mod youtube;

/// Rejects empty and whitespace-only values. Required fields use
/// `#[serde(default)]`, so a missing field fails this check the same
/// way an empty one does, instead of being rejected at deserialization.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// First field-level message out of a validation failure. The schemas
/// attach a fixed message per field, so this yields the API's stable
/// error strings.
pub(crate) fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
