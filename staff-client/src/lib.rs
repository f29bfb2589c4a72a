//! Staff Client - HTTP client for the employee API
//!
//! Provides network-based REST calls for reading, creating and
//! replacing employee records.

pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use api::{EmployeeApi, EmployeeClient};
pub use client::{HttpClient, NetworkHttpClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};

// Re-export shared types for convenience
pub use shared::{Employee, EmployeePayload, EmployeeStatus};
