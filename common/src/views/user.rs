use serde::{Deserialize, Serialize};

/// A user record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The unique identifier for this user, assigned by the backend.
    pub id: i64,

    /// The user's first name.
    pub user_first_name: String,

    /// The user's last name.
    pub user_last_name: String,

    /// The user's email address.
    pub user_email: String,
}
