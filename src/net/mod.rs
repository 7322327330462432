//! Network layer: the authenticated API client and per-endpoint schemas.

pub mod api;
pub mod types;
