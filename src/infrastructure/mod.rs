//! Infrastructure adapters: persistence, caching, and QR rendering.

pub mod cache;
pub mod persistence;
pub mod qr;
