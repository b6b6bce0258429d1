use chrono::NaiveDate;
use serde::Deserialize;
use tauri::State;

use crate::models::attendance::{
    AttendanceCreateInput, AttendanceFilter, AttendanceRecord, AttendanceSummary,
};
use crate::services::attendance_service::{AttendancePage, MarkOutcome};

use super::{AppState, CommandResult};

/// Filter values as the page sends them; a blank employee select maps to
/// no filter at all.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AttendanceFilterInput {
    pub employee_id: Option<String>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl From<AttendanceFilterInput> for AttendanceFilter {
    fn from(input: AttendanceFilterInput) -> Self {
        AttendanceFilter {
            employee_id: input
                .employee_id
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
            from_date: input.from_date,
            to_date: input.to_date,
        }
    }
}

#[tauri::command]
pub async fn attendance_page_load(state: State<'_, AppState>) -> CommandResult<AttendancePage> {
    let service = state.inner().attendance();
    Ok(service.page_load().await?)
}

#[tauri::command]
pub async fn attendance_list(
    state: State<'_, AppState>,
    filters: Option<AttendanceFilterInput>,
) -> CommandResult<Vec<AttendanceRecord>> {
    let service = state.inner().attendance();
    let filter = AttendanceFilter::from(filters.unwrap_or_default());
    Ok(service.list(&filter).await?)
}

#[tauri::command]
pub async fn attendance_mark(
    state: State<'_, AppState>,
    payload: AttendanceCreateInput,
    filters: Option<AttendanceFilterInput>,
) -> CommandResult<MarkOutcome> {
    let service = state.inner().attendance();
    let filter = AttendanceFilter::from(filters.unwrap_or_default());
    Ok(service.mark(payload, &filter).await?)
}

#[tauri::command]
pub async fn attendance_summary(
    state: State<'_, AppState>,
    employee_id: String,
) -> CommandResult<AttendanceSummary> {
    let service = state.inner().attendance();
    Ok(service.summary(&employee_id).await?)
}
