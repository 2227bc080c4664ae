//! Command-line client for the admin-panel `/users` REST API.

pub mod client;
pub mod commands;
pub mod config;
pub mod form;
pub mod table;
