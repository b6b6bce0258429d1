use tauri::State;

use crate::models::employee::{Employee, EmployeeCreateInput};
use crate::services::employee_service::DeleteOutcome;

use super::{AppState, CommandResult};

#[tauri::command]
pub async fn employees_list(state: State<'_, AppState>) -> CommandResult<Vec<Employee>> {
    let service = state.inner().employees();
    Ok(service.list().await?)
}

#[tauri::command]
pub async fn employees_create(
    state: State<'_, AppState>,
    payload: EmployeeCreateInput,
) -> CommandResult<Vec<Employee>> {
    let service = state.inner().employees();
    Ok(service.create(payload).await?)
}

/// `confirmed` is the user's answer to the confirmation dialog; a declined
/// delete returns without touching the network.
#[tauri::command]
pub async fn employees_delete(
    state: State<'_, AppState>,
    employee_id: String,
    confirmed: bool,
) -> CommandResult<DeleteOutcome> {
    let service = state.inner().employees();
    Ok(service.delete(&employee_id, confirmed).await?)
}
