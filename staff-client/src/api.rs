//! Employee API
//!
//! Typed wrappers over the three employee endpoints:
//! - `GET  /employees/{id}`
//! - `POST /employees`
//! - `PUT  /employees/{id}`

use crate::{ClientError, ClientResult, HttpClient};
use async_trait::async_trait;
use reqwest::Url;
use serde::de::IgnoredAny;
use shared::{Employee, EmployeePayload};

const EMPLOYEES_PATH: &str = "employees";

/// Employee REST collaborator
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// Fetch one employee by identifier
    async fn get_employee(&self, id: &str) -> ClientResult<Employee>;

    /// Create a new employee
    async fn create_employee(&self, payload: &EmployeePayload) -> ClientResult<()>;

    /// Replace the employee stored under `id`
    async fn update_employee(&self, id: &str, payload: &EmployeePayload) -> ClientResult<()>;
}

/// [`EmployeeApi`] over any [`HttpClient`]
#[derive(Debug, Clone)]
pub struct EmployeeClient<H> {
    http: H,
}

impl<H: HttpClient> EmployeeClient<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    /// Underlying transport
    pub fn http(&self) -> &H {
        &self.http
    }
}

/// `employees/{id}` with `id` percent-encoded as a single path segment
fn employee_path(id: &str) -> ClientResult<String> {
    let mut url = Url::parse("http://localhost/")
        .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| ClientError::InvalidUrl("base cannot hold path segments".into()))?
        .pop_if_empty()
        .push(EMPLOYEES_PATH)
        .push(id);
    Ok(url.path().trim_start_matches('/').to_string())
}

#[async_trait]
impl<H: HttpClient> EmployeeApi for EmployeeClient<H> {
    async fn get_employee(&self, id: &str) -> ClientResult<Employee> {
        let path = employee_path(id)?;
        let employee: Employee = self.http.get(&path).await?;
        tracing::debug!(employee_id = %employee.id, "Fetched employee");
        Ok(employee)
    }

    async fn create_employee(&self, payload: &EmployeePayload) -> ClientResult<()> {
        let _: IgnoredAny = self.http.post(EMPLOYEES_PATH, payload).await?;
        tracing::info!(employee_id = %payload.id, "Employee created");
        Ok(())
    }

    async fn update_employee(&self, id: &str, payload: &EmployeePayload) -> ClientResult<()> {
        let path = employee_path(id)?;
        let _: IgnoredAny = self.http.put(&path, payload).await?;
        tracing::info!(employee_id = %id, "Employee updated");
        Ok(())
    }
}
