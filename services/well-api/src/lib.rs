//! Well query API library.
//!
//! HTTP surface over the well store: exact lookup by API number and
//! polygon containment. All transport concerns (routing, JSON bodies,
//! status mapping) live here; the core crates never see axum.

pub mod handlers;
pub mod state;
