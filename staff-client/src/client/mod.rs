//! Client module - transport layer for the employee API.

pub mod http;

pub use http::{HttpClient, NetworkHttpClient};
