//! Response bodies for the admin-panel user API.

mod user;
pub use user::*;
