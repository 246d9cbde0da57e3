//! Core business logic
//!
//! Pure computation with no I/O: the bounded-budget subset selector.

pub mod selector;

pub use selector::select;
