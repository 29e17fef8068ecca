//! Request extractors and middleware layers.

pub mod auth;
pub mod client_meta;
pub mod tracing;

pub use auth::AuthUser;
pub use client_meta::ClientMeta;
