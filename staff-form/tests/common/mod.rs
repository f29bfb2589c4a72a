// In-memory employee API for view and host tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use staff_client::{ClientError, ClientResult, Employee, EmployeeApi, EmployeePayload, EmployeeStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get(String),
    Create(EmployeePayload),
    Update(String, EmployeePayload),
}

#[derive(Debug, Clone, Default)]
pub struct FakeApi {
    records: Arc<Mutex<HashMap<String, Employee>>>,
    calls: Arc<Mutex<Vec<Call>>>,
    fail_writes: bool,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employee(self, employee: Employee) -> Self {
        self.records
            .lock()
            .unwrap()
            .insert(employee.id.clone(), employee);
        self
    }

    /// Every create/update answers with a server error
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn record(&self, id: &str) -> Option<Employee> {
        self.records.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl EmployeeApi for FakeApi {
    async fn get_employee(&self, id: &str) -> ClientResult<Employee> {
        self.calls.lock().unwrap().push(Call::Get(id.to_string()));
        self.record(id)
            .ok_or_else(|| ClientError::NotFound(format!("employee {id}")))
    }

    async fn create_employee(&self, payload: &EmployeePayload) -> ClientResult<()> {
        self.calls.lock().unwrap().push(Call::Create(payload.clone()));
        if self.fail_writes {
            return Err(ClientError::Internal("500 Internal Server Error".into()));
        }
        self.records
            .lock()
            .unwrap()
            .insert(payload.id.clone(), payload.clone());
        Ok(())
    }

    async fn update_employee(&self, id: &str, payload: &EmployeePayload) -> ClientResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Update(id.to_string(), payload.clone()));
        if self.fail_writes {
            return Err(ClientError::Internal("500 Internal Server Error".into()));
        }
        self.records
            .lock()
            .unwrap()
            .insert(id.to_string(), payload.clone());
        Ok(())
    }
}

pub fn jane() -> Employee {
    Employee {
        id: "42".into(),
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        status: EmployeeStatus::Active,
    }
}
