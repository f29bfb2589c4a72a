//! Shared types for Staff Desk
//!
//! Wire models exchanged between the staff client and the employee API.

pub mod models;

// Re-exports
pub use models::{Employee, EmployeePayload, EmployeeStatus, ParseStatusError};
pub use serde::{Deserialize, Serialize};
