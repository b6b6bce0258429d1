use tauri::State;

use crate::services::dashboard_service::DashboardOverview;

use super::{AppState, CommandResult};

#[tauri::command]
pub async fn dashboard_summary_fetch(
    state: State<'_, AppState>,
) -> CommandResult<DashboardOverview> {
    let service = state.inner().dashboard();
    Ok(service.overview().await?)
}
