//! Document and domain model structs, connected by pure mappers.
//!
//! Each submodule contains:
//! - A `FromRow` document struct mirroring the raw row, with every
//!   non-key field `Option` (the storage shape is loose)
//! - A `Serialize` domain struct with all required fields populated
//! - A `Deserialize` create DTO for inserts
//! - A `TryFrom<Document>` mapper that rejects incomplete documents
//!   with [`CoreError::Validation`]
//!
//! Mapper rules: numeric fields are checked for presence only (`Some(0)`
//! is a legitimate order or gpa), string fields must be present and
//! non-empty, sequence fields must be present but may be empty.

pub mod bullet_point;
pub mod demo;
pub mod education;
pub mod project;
pub mod skill;

use folio_core::error::CoreError;

/// Require a field to be present.
pub(crate) fn require<T>(
    field: Option<T>,
    entity: &'static str,
    name: &'static str,
) -> Result<T, CoreError> {
    field.ok_or_else(|| CoreError::Validation(format!("Invalid {entity} document: missing {name}")))
}

/// Require a text field to be present and non-empty.
pub(crate) fn require_text(
    field: Option<String>,
    entity: &'static str,
    name: &'static str,
) -> Result<String, CoreError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(CoreError::Validation(format!(
            "Invalid {entity} document: missing {name}"
        ))),
    }
}
