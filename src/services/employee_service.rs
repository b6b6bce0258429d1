use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::api::{paths, ApiClient};
use crate::error::{AppError, AppResult};
use crate::models::employee::{Employee, EmployeeCreateInput};

/// Result of a delete request after the confirmation gate. A declined
/// confirmation performs no network call at all.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", content = "employees")]
pub enum DeleteOutcome {
    Declined,
    Deleted(Vec<Employee>),
}

/// Fetch orchestration for the employees page. Every mutation is followed
/// by a full refetch of the list; the page only ever sees the server's own
/// collection, never a locally patched one.
#[derive(Clone)]
pub struct EmployeeService {
    api: Arc<ApiClient>,
}

impl EmployeeService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        let value = self.api.get(&paths::employees()).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Registers an employee, then returns the refetched list.
    pub async fn create(&self, input: EmployeeCreateInput) -> AppResult<Vec<Employee>> {
        input.validate().map_err(AppError::validation)?;

        self.api
            .post(&paths::employees(), &serde_json::to_value(&input)?)
            .await?;

        self.list().await
    }

    /// Deletes an employee (the server cascade-deletes their attendance)
    /// and returns the refetched list. `confirmed` is the user's answer to
    /// the confirmation prompt; declining skips the network entirely.
    pub async fn delete(&self, employee_id: &str, confirmed: bool) -> AppResult<DeleteOutcome> {
        if !confirmed {
            debug!(target: "app::employees", employee_id, "delete declined by user");
            return Ok(DeleteOutcome::Declined);
        }

        self.api.delete(&paths::employee(employee_id)).await?;
        let employees = self.list().await?;
        Ok(DeleteOutcome::Deleted(employees))
    }
}
