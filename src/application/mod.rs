//! Application layer: analytics aggregation and request-facing services.

pub mod analytics;
pub mod services;
