use std::sync::Arc;

use serde::Serialize;

use crate::api::{paths, ApiClient};
use crate::error::AppResult;
use crate::models::dashboard::DashboardSummary;

/// Dashboard snapshot plus the display ratios for the attendance bar.
/// These percentages are the only arithmetic performed on this side of
/// the API.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardOverview {
    pub summary: DashboardSummary,
    pub present_percent: f64,
    pub absent_percent: f64,
}

#[derive(Clone)]
pub struct DashboardService {
    api: Arc<ApiClient>,
}

impl DashboardService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn overview(&self) -> AppResult<DashboardOverview> {
        let summary: DashboardSummary =
            serde_json::from_value(self.api.get(&paths::dashboard_summary()).await?)?;

        let present_percent = percent(summary.today_stats.present, summary.total_employees);
        let absent_percent = percent(summary.today_stats.absent, summary.total_employees);

        Ok(DashboardOverview {
            summary,
            present_percent,
            absent_percent,
        })
    }
}

/// Share of today's headcount, guarded against an empty roster.
fn percent(count: i64, total: i64) -> f64 {
    (count as f64 / total.max(1) as f64) * 100.0
}
