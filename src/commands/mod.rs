pub mod attendance;
pub mod dashboard;
pub mod employee;

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::error;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};
use crate::services::attendance_service::AttendanceService;
use crate::services::dashboard_service::DashboardService;
use crate::services::employee_service::EmployeeService;

/// Shared handles for the page commands. Built once in the setup hook;
/// holds no mutable state of its own.
#[derive(Clone)]
pub struct AppState {
    employee_service: Arc<EmployeeService>,
    attendance_service: Arc<AttendanceService>,
    dashboard_service: Arc<DashboardService>,
}

impl AppState {
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let api = Arc::new(ApiClient::new(config)?);

        Ok(Self {
            employee_service: Arc::new(EmployeeService::new(Arc::clone(&api))),
            attendance_service: Arc::new(AttendanceService::new(Arc::clone(&api))),
            dashboard_service: Arc::new(DashboardService::new(api)),
        })
    }

    pub fn employees(&self) -> Arc<EmployeeService> {
        Arc::clone(&self.employee_service)
    }

    pub fn attendance(&self) -> Arc<AttendanceService> {
        Arc::clone(&self.attendance_service)
    }

    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard_service)
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonValue>,
}

impl CommandError {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Option<JsonValue>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details,
        }
    }
}

impl From<AppError> for CommandError {
    fn from(error: AppError) -> Self {
        match error {
            AppError::Api { status, message } => CommandError::new(
                "API_ERROR",
                message,
                Some(serde_json::json!({ "status": status })),
            ),
            AppError::Transport(error) => {
                CommandError::new("TRANSPORT_ERROR", error.to_string(), None)
            }
            AppError::Validation { message } => {
                CommandError::new("VALIDATION_ERROR", message, None)
            }
            AppError::Serialization(error) => {
                error!(target: "app::command", error = %error, "serialization error in command");
                CommandError::new("UNKNOWN", "unexpected response shape", None)
            }
            AppError::Other(message) => {
                error!(target: "app::command", %message, "unexpected error in command");
                CommandError::new("UNKNOWN", message, None)
            }
        }
    }
}
