//! URL shortening service with per-link click analytics.
//!
//! Maps short codes to destination URLs, records every redirect as a click
//! event, and serves owners aggregated reports over their links' history.
//!
//! # Architecture
//!
//! - [`domain`] - entities and repository traits
//! - [`application`] - services and the analytics aggregator
//! - [`infrastructure`] - PostgreSQL stores, redirect cache, QR rendering
//! - [`api`] - axum handlers, extractors, and DTOs
//!
//! # Invariants
//!
//! - Short codes are globally unique; the store is the final arbiter.
//! - A successful redirect records exactly one click event and one counter
//!   increment, atomically, so the counter always equals the event count.
//! - Expired links refuse redirects with `410 Gone` but keep serving
//!   analytics to their owner.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod routes;
pub mod server;
pub mod state;
pub mod utils;
