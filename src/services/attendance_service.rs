use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::api::{paths, ApiClient};
use crate::error::AppResult;
use crate::models::attendance::{
    AttendanceCreateInput, AttendanceFilter, AttendanceRecord, AttendanceSummary,
};
use crate::models::employee::Employee;

/// Initial state for the attendance page: the employee roster for the
/// select boxes, then the unfiltered record list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AttendancePage {
    pub employees: Vec<Employee>,
    pub records: Vec<AttendanceRecord>,
}

/// Result of marking attendance: the refetched record list under the
/// caller's active filter, plus the refreshed summary when the marked
/// employee is the one being filtered on.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MarkOutcome {
    pub records: Vec<AttendanceRecord>,
    pub summary: Option<AttendanceSummary>,
}

#[derive(Clone)]
pub struct AttendanceService {
    api: Arc<ApiClient>,
}

impl AttendanceService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Sequential page load: employees first, records only after the
    /// roster fetch resolves.
    pub async fn page_load(&self) -> AppResult<AttendancePage> {
        let employees = serde_json::from_value(self.api.get(&paths::employees()).await?)?;
        let records = self.list(&AttendanceFilter::default()).await?;
        Ok(AttendancePage { employees, records })
    }

    pub async fn list(&self, filter: &AttendanceFilter) -> AppResult<Vec<AttendanceRecord>> {
        let value = self.api.get(&paths::attendance(filter)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Creates an attendance record, then refetches the list under the
    /// active filter. The summary panel is refreshed only when it is
    /// showing the employee that was just marked.
    pub async fn mark(
        &self,
        input: AttendanceCreateInput,
        active_filter: &AttendanceFilter,
    ) -> AppResult<MarkOutcome> {
        self.api
            .post(&paths::attendance_create(), &serde_json::to_value(&input)?)
            .await?;

        let records = self.list(active_filter).await?;

        let summary = if active_filter.employee_id.as_deref() == Some(input.employee_id.as_str()) {
            self.summary_or_none(&input.employee_id).await
        } else {
            None
        };

        Ok(MarkOutcome { records, summary })
    }

    pub async fn summary(&self, employee_id: &str) -> AppResult<AttendanceSummary> {
        let value = self.api.get(&paths::attendance_summary(employee_id)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Summary fetch for the filter panel; failures clear the panel
    /// instead of raising.
    pub async fn summary_or_none(&self, employee_id: &str) -> Option<AttendanceSummary> {
        match self.summary(employee_id).await {
            Ok(summary) => Some(summary),
            Err(error) => {
                debug!(
                    target: "app::attendance",
                    employee_id,
                    error = %error,
                    "summary fetch failed, clearing panel"
                );
                None
            }
        }
    }
}
