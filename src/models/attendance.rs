use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attendance status as the API spells it on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// One employee, one calendar day. Created once and never updated or
/// deleted from this side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceCreateInput {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// List filters; unset fields are omitted from the query string entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceFilter {
    pub employee_id: Option<String>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

/// Server-computed per-employee totals; read-only on this side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceSummary {
    pub employee_id: String,
    pub total_present_days: i64,
    pub total_absent_days: i64,
}
