//! HTTP client for the shop service.
//!
//! Wraps the service's JSON/HTTP endpoints (table listing, creation and
//! deletion; product CRUD within a table) using [`reqwest`]. Every
//! operation is a single unary request/response: no retries, no
//! pagination, no streaming.

pub mod api;
pub mod config;

pub use api::{RemoteStore, StoreError};
pub use config::StoreConfig;
