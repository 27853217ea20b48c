/// Data models for Roster
///
/// This module contains the data models and their field-mapping constructors.
///
/// # Models
///
/// - `user`: User records with construction-time field validation
///
/// # Example
///
/// ```
/// use roster_models::models::user::User;
/// use serde_json::json;
///
/// let user = User::from_value(&json!({
///     "id": 1,
///     "name": "Ana",
///     "email": "ana@example.com",
/// }))
/// .unwrap();
///
/// assert_eq!(user.email, "ana@example.com");
/// ```

pub mod user;
