//! HTTP API surface: DTOs, extractors, and handlers.

pub mod dto;
pub mod handlers;
pub mod middleware;
