//! HTTP layer
//!
//! Axum handlers for the optimizer API endpoints.

pub mod handlers;
