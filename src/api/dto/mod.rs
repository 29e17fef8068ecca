//! Data transfer objects for the HTTP API.

pub mod analytics;
pub mod auth;
pub mod links;
pub mod shorten;
