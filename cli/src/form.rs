use panelctl_common::params::SaveUserParams;

/// The input values a CRUD operation reads before dispatch. Values are taken
/// verbatim; the backend owns validation, so blanks and malformed
/// identifiers go out as-is.
#[derive(Debug, Clone, Default)]
pub struct UserForm {
    /// Target identifier for read-one, update, and delete. Only ever
    /// embedded in the resource path, never in a request body.
    pub id: String,

    pub user_first_name: String,

    pub user_last_name: String,

    pub user_email: String,
}

impl UserForm {
    /// Snapshot the body fields for a create or update request. The
    /// snapshot is taken synchronously at dispatch time, so later edits to
    /// the form cannot leak into an in-flight request. The id field is
    /// excluded no matter what it holds.
    pub fn save_params(&self) -> SaveUserParams {
        SaveUserParams {
            user_first_name: self.user_first_name.clone(),
            user_last_name: self.user_last_name.clone(),
            user_email: self.user_email.clone(),
        }
    }
}
