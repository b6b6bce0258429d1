pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    if let Err(error) = try_run() {
        eprintln!("failed to launch application: {error}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let handle = app.handle();

            crate::utils::logger::init_logging(handle)
                .map_err(|err| Box::new(err) as Box<dyn std::error::Error>)?;

            // Base URL is read from the environment exactly once, here.
            let config = crate::config::ApiConfig::from_env();

            let state = crate::commands::AppState::new(&config)
                .map_err(|err| Box::new(err) as Box<dyn std::error::Error>)?;
            app.manage(state);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            crate::commands::employee::employees_list,
            crate::commands::employee::employees_create,
            crate::commands::employee::employees_delete,
            crate::commands::attendance::attendance_page_load,
            crate::commands::attendance::attendance_list,
            crate::commands::attendance::attendance_mark,
            crate::commands::attendance::attendance_summary,
            crate::commands::dashboard::dashboard_summary_fetch,
        ])
        .run(tauri::generate_context!())?;

    Ok(())
}
