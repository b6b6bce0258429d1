use serde::{Deserialize, Serialize};

/// Global snapshot returned by `/api/dashboard/summary`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    pub total_employees: i64,
    pub today_stats: TodayStats,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodayStats {
    pub date: String,
    pub present: i64,
    pub absent: i64,
    pub not_marked: i64,
}
