//! Wire types shared between panelctl and the admin-panel user API.

pub mod params;
pub mod views;
