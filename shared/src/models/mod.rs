//! Data models
//!
//! Shared between the REST client and the form view.

pub mod employee;

// Re-exports
pub use employee::*;
