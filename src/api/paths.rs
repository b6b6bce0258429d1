//! Builders for every remote path the console consumes. Pages never format
//! endpoint strings themselves; keeping construction here makes the query
//! rules (omit unset filters, no stray `?`/`&`) testable in one place.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::attendance::AttendanceFilter;

// Characters that cannot appear raw in a path segment or query value.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%')
    .add(b'&')
    .add(b'=')
    .add(b'+');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

pub fn employees() -> String {
    "/api/employees".to_string()
}

pub fn employee(employee_id: &str) -> String {
    format!("/api/employees/{}", encode(employee_id))
}

/// `/api/attendance` with only the filters that are actually set. No
/// filters means no `?` at all, and the query never ends in `&`.
pub fn attendance(filter: &AttendanceFilter) -> String {
    let mut params: Vec<(&str, String)> = Vec::new();
    if let Some(employee_id) = &filter.employee_id {
        params.push(("employee_id", encode(employee_id)));
    }
    if let Some(from_date) = filter.from_date {
        params.push(("from_date", from_date.format("%Y-%m-%d").to_string()));
    }
    if let Some(to_date) = filter.to_date {
        params.push(("to_date", to_date.format("%Y-%m-%d").to_string()));
    }

    if params.is_empty() {
        return "/api/attendance".to_string();
    }

    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    format!("/api/attendance?{query}")
}

/// POST target for new attendance records.
pub fn attendance_create() -> String {
    "/api/attendance".to_string()
}

pub fn attendance_summary(employee_id: &str) -> String {
    format!("/api/attendance/summary/{}", encode(employee_id))
}

pub fn dashboard_summary() -> String {
    "/api/dashboard/summary".to_string()
}
