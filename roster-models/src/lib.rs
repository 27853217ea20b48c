//! # Roster Models
//!
//! This crate contains the shared data models for Roster. It currently holds
//! a single model, the `User` record, together with its construction-time
//! validation.
//!
//! ## Module Organization
//!
//! - `models`: Data models and their field-mapping constructors
//! - `error`: Validation error types
//!
//! ## Example
//!
//! ```
//! use roster_models::models::user::User;
//! use serde_json::json;
//!
//! let fields = json!({
//!     "id": 1,
//!     "name": "Ana",
//!     "email": "ana@example.com",
//! });
//!
//! let user = User::from_value(&fields).unwrap();
//! assert_eq!(user.id, 1);
//! assert!(user.users.is_none());
//! ```

pub mod error;
pub mod models;

/// Current version of the Roster models library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
