use serde::{Deserialize, Serialize};

/// Body for creating or updating a user. The backend owns identifier
/// assignment, so there is no `id` field here: update and delete target a
/// record through the resource path, never through the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveUserParams {
    pub user_first_name: String,

    pub user_last_name: String,

    pub user_email: String,
}
