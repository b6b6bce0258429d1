pub mod attendance_service;
pub mod dashboard_service;
pub mod employee_service;
