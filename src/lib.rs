//! Shopping Cart Optimizer service library
//!
//! Exact 0/1 knapsack selection behind a small HTTP API, with every
//! optimize request recorded as a retrievable session.

pub mod core;
pub mod error;
pub mod logging;
pub mod server;
pub mod services;
pub mod traits;
pub mod types;
pub mod validation;
pub mod web;

// Re-export main types
pub use error::{OptimizerError, OptimizerResult};
pub use server::OptimizerServer;
pub use types::{Item, OptimizeRequest, Selection, SessionRecord};

// Re-export trait definitions
pub use traits::SessionStore;

// Re-export service implementations
pub use services::FileSessionStore;
