/// User model and field-mapping construction
///
/// This module provides the User record and its validating constructor. A
/// User is built once from a mapping of field names to values; construction
/// either yields a fully valid record or fails with a
/// [`ValidationError`](crate::error::ValidationError) naming every offending
/// field. No mutating operations are defined.
///
/// # Fields
///
/// ```text
/// id       integer            required
/// name     string             required
/// email    string             required
/// users    array of strings   optional (absent by default)
/// address  string             optional (absent by default)
/// ```
///
/// Validation is structural only: presence and type. The email address is
/// not checked for well-formedness and the id is not checked for
/// positivity or uniqueness.
///
/// # Example
///
/// ```
/// use roster_models::models::user::User;
/// use serde_json::json;
///
/// let user = User::from_value(&json!({
///     "id": 2,
///     "name": "Bo",
///     "email": "bo@example.com",
///     "users": ["x", "y"],
///     "address": "Main St",
/// }))
/// .unwrap();
///
/// assert_eq!(user.users.as_deref(), Some(&["x".to_string(), "y".to_string()][..]));
///
/// // Round-trip through the plain field mapping
/// let same = User::from_fields(&user.to_fields()).unwrap();
/// assert_eq!(user, same);
/// ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{FieldError, ValidationError};

/// User record
///
/// Immutable at the type level once constructed: all validation happens in
/// [`User::from_fields`] and no mutating operations are provided. Absent
/// optional fields are `None`, which is distinct from an empty list or an
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Email address (not validated for well-formedness)
    pub email: String,

    /// Optional ordered list of associated user names
    ///
    /// `None` when not supplied, never an empty list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<String>>,

    /// Optional postal address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl User {
    /// Constructs a User from a mapping of field names to values
    ///
    /// Every field is validated before returning, so a failed construction
    /// reports all offending fields at once rather than stopping at the
    /// first. Unknown field names in the mapping are ignored. An explicit
    /// `null` for an optional field counts as absent; `null` for a required
    /// field is a type error.
    ///
    /// # Arguments
    ///
    /// * `fields` - Field mapping supplying at least `id`, `name` and `email`
    ///
    /// # Returns
    ///
    /// The constructed record with `users` and `address` defaulting to
    /// `None` when not supplied
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing each required field that is
    /// missing and each supplied field whose value does not conform to the
    /// declared type
    ///
    /// # Example
    ///
    /// ```
    /// use roster_models::models::user::User;
    /// use serde_json::{json, Map, Value};
    ///
    /// let mut fields = Map::new();
    /// fields.insert("id".to_string(), json!(1));
    /// fields.insert("name".to_string(), json!("Ana"));
    /// fields.insert("email".to_string(), json!("ana@example.com"));
    ///
    /// let user = User::from_fields(&fields).unwrap();
    /// assert_eq!(user.name, "Ana");
    /// assert!(user.address.is_none());
    /// ```
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, ValidationError> {
        let id = require_integer(fields, "id");
        let name = require_text(fields, "name");
        let email = require_text(fields, "email");
        let users = optional_text_array(fields, "users");
        let address = optional_text(fields, "address");

        match (id, name, email, users, address) {
            (Ok(id), Ok(name), Ok(email), Ok(users), Ok(address)) => Ok(User {
                id,
                name,
                email,
                users,
                address,
            }),
            (id, name, email, users, address) => {
                let errors: Vec<FieldError> =
                    [id.err(), name.err(), email.err(), users.err(), address.err()]
                        .into_iter()
                        .flatten()
                        .collect();
                let error = ValidationError::from(errors);
                tracing::debug!(%error, "user validation failed");
                Err(error)
            }
        }
    }

    /// Constructs a User from an arbitrary JSON value
    ///
    /// Convenience wrapper around [`User::from_fields`] for callers holding
    /// a [`Value`] rather than a field mapping.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] with a single
    /// [`FieldError::NotAnObject`] entry when `value` is not an object,
    /// otherwise whatever [`User::from_fields`] reports
    ///
    /// # Example
    ///
    /// ```
    /// use roster_models::models::user::User;
    /// use serde_json::json;
    ///
    /// let err = User::from_value(&json!([1, 2, 3])).unwrap_err();
    /// assert_eq!(err.to_string(), "validation failed: expected a field mapping, got array");
    /// ```
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(fields) => Self::from_fields(fields),
            other => Err(ValidationError::from(vec![FieldError::NotAnObject {
                found: json_type_name(other).to_string(),
            }])),
        }
    }

    /// Serializes the record to its plain field mapping
    ///
    /// Absent optional fields are omitted from the mapping entirely rather
    /// than written as `null`. Feeding the result back through
    /// [`User::from_fields`] reconstructs an equal record.
    ///
    /// # Example
    ///
    /// ```
    /// # use roster_models::models::user::User;
    /// let user = User {
    ///     id: 1,
    ///     name: "Ana".to_string(),
    ///     email: "ana@example.com".to_string(),
    ///     users: None,
    ///     address: None,
    /// };
    ///
    /// let fields = user.to_fields();
    /// assert!(!fields.contains_key("users"));
    /// assert_eq!(User::from_fields(&fields).unwrap(), user);
    /// ```
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();

        fields.insert("id".to_string(), Value::from(self.id));
        fields.insert("name".to_string(), Value::String(self.name.clone()));
        fields.insert("email".to_string(), Value::String(self.email.clone()));

        if let Some(ref users) = self.users {
            let items = users.iter().cloned().map(Value::String).collect();
            fields.insert("users".to_string(), Value::Array(items));
        }
        if let Some(ref address) = self.address {
            fields.insert("address".to_string(), Value::String(address.clone()));
        }

        fields
    }
}

/// Human-readable name of a JSON value's type, for error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Extracts a required integer field
///
/// Only exact integers conform; fractional numbers and numeric strings are
/// type errors.
fn require_integer(fields: &Map<String, Value>, field: &'static str) -> Result<i64, FieldError> {
    match fields.get(field) {
        None => Err(FieldError::Missing(field)),
        Some(value) => value.as_i64().ok_or_else(|| FieldError::WrongType {
            field,
            expected: "integer",
            found: json_type_name(value).to_string(),
        }),
    }
}

/// Extracts a required text field
fn require_text(fields: &Map<String, Value>, field: &'static str) -> Result<String, FieldError> {
    match fields.get(field) {
        None => Err(FieldError::Missing(field)),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(FieldError::WrongType {
            field,
            expected: "string",
            found: json_type_name(other).to_string(),
        }),
    }
}

/// Extracts an optional text field; absent and `null` both yield `None`
fn optional_text(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, FieldError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(other) => Err(FieldError::WrongType {
            field,
            expected: "string",
            found: json_type_name(other).to_string(),
        }),
    }
}

/// Extracts an optional array-of-text field; absent and `null` both yield
/// `None`, while an empty array yields `Some` of an empty list
fn optional_text_array(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<Vec<String>>, FieldError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match item {
                    Value::String(text) => out.push(text.clone()),
                    other => {
                        return Err(FieldError::WrongType {
                            field,
                            expected: "array of strings",
                            found: format!("{} at index {}", json_type_name(other), index),
                        })
                    }
                }
            }
            Ok(Some(out))
        }
        Some(other) => Err(FieldError::WrongType {
            field,
            expected: "array of strings",
            found: json_type_name(other).to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_fields() -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("id".to_string(), json!(1));
        fields.insert("name".to_string(), json!("Ana"));
        fields.insert("email".to_string(), json!("ana@example.com"));
        fields
    }

    #[test]
    fn test_user_struct() {
        let user = User {
            id: 1,
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            users: None,
            address: None,
        };

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "test@example.com");
        assert!(user.users.is_none());
    }

    #[test]
    fn test_from_fields_minimal() {
        let user = User::from_fields(&minimal_fields()).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Ana");
        assert!(user.users.is_none());
        assert!(user.address.is_none());
    }

    #[test]
    fn test_json_type_name() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!(1.5)), "number");
        assert_eq!(json_type_name(&json!("x")), "string");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }

    #[test]
    fn test_require_integer_rejects_fractional() {
        let mut fields = minimal_fields();
        fields.insert("id".to_string(), json!(1.5));

        let err = require_integer(&fields, "id").unwrap_err();
        assert_eq!(
            err,
            FieldError::WrongType {
                field: "id",
                expected: "integer",
                found: "number".to_string(),
            }
        );
    }

    #[test]
    fn test_optional_text_array_reports_element_index() {
        let mut fields = Map::new();
        fields.insert("users".to_string(), json!(["a", 2, "c"]));

        let err = optional_text_array(&fields, "users").unwrap_err();
        assert_eq!(
            err,
            FieldError::WrongType {
                field: "users",
                expected: "array of strings",
                found: "number at index 1".to_string(),
            }
        );
    }

    // End-to-end validation scenarios are in tests/user_validation_tests.rs
}
