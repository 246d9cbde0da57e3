//! Service implementations
//!
//! Real implementations of the storage trait used at runtime.

pub mod session_store;

pub use session_store::FileSessionStore;
