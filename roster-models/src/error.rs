/// Validation error types for model construction
///
/// Construction from a field mapping either yields a fully valid record or a
/// [`ValidationError`] listing every field that failed. There is no partial
/// construction: callers fix their input and construct again.

use thiserror::Error;

/// A single field-level validation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A required field was not supplied
    #[error("missing required field `{0}`")]
    Missing(&'static str),

    /// A supplied value does not conform to the field's declared type
    #[error("invalid type for field `{field}`: expected {expected}, got {found}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    /// The top-level input was not a field mapping at all
    #[error("expected a field mapping, got {found}")]
    NotAnObject { found: String },
}

impl FieldError {
    /// Name of the offending field, or `None` for a top-level shape error
    pub fn field(&self) -> Option<&'static str> {
        match self {
            FieldError::Missing(field) => Some(field),
            FieldError::WrongType { field, .. } => Some(field),
            FieldError::NotAnObject { .. } => None,
        }
    }
}

/// Validation failure for a whole record
///
/// Carries every [`FieldError`] found in the input, not just the first, so
/// the caller can correct all offending fields in one pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation failed: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct ValidationError(pub(crate) Vec<FieldError>);

impl ValidationError {
    /// The individual field failures, in field declaration order
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Names of the offending fields, in field declaration order
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().filter_map(FieldError::field).collect()
    }
}

impl From<Vec<FieldError>> for ValidationError {
    fn from(errors: Vec<FieldError>) -> Self {
        ValidationError(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = FieldError::Missing("id");
        assert_eq!(err.to_string(), "missing required field `id`");
    }

    #[test]
    fn test_wrong_type_display() {
        let err = FieldError::WrongType {
            field: "id",
            expected: "integer",
            found: "string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid type for field `id`: expected integer, got string"
        );
    }

    #[test]
    fn test_validation_error_joins_messages() {
        let err = ValidationError(vec![
            FieldError::Missing("id"),
            FieldError::Missing("email"),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: missing required field `id`; missing required field `email`"
        );
        assert_eq!(err.fields(), vec!["id", "email"]);
    }
}
