//! Caching layer for redirect lookups.

mod moka_cache;
mod null_cache;
mod service;

pub use moka_cache::MokaCache;
pub use null_cache::NullCache;
pub use service::{CacheError, CacheResult, CacheService};
