use std::sync::Arc;

use chrono::NaiveDate;
use httpmock::prelude::*;
use serde_json::json;
use staffdesk_app_lib::api::ApiClient;
use staffdesk_app_lib::config::ApiConfig;
use staffdesk_app_lib::models::attendance::{
    AttendanceCreateInput, AttendanceFilter, AttendanceStatus,
};
use staffdesk_app_lib::services::attendance_service::AttendanceService;

fn service_for(server: &MockServer) -> AttendanceService {
    let config = ApiConfig::with_base_url(server.base_url());
    let api = Arc::new(ApiClient::new(&config).expect("client builds"));
    AttendanceService::new(api)
}

fn march_4() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid date")
}

#[tokio::test]
async fn page_load_fetches_roster_then_records() {
    let server = MockServer::start_async().await;

    let employees_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/employees");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([
                    {"id": 1, "employee_id": "EMP001", "full_name": "John Doe", "email": "john@company.com", "department": "Engineering"}
                ]));
        })
        .await;

    let records_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/attendance");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([
                    {"id": 10, "employee_id": "EMP001", "date": "2024-03-04", "status": "Present"}
                ]));
        })
        .await;

    let service = service_for(&server);
    let page = service.page_load().await.expect("page load succeeds");

    employees_mock.assert_async().await;
    records_mock.assert_async().await;
    assert_eq!(page.employees.len(), 1);
    assert_eq!(page.records.len(), 1);
    assert_eq!(page.records[0].status, AttendanceStatus::Present);
}

#[tokio::test]
async fn filtered_list_sends_only_set_filters() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/attendance")
                .query_param("employee_id", "EMP001")
                .query_param("from_date", "2024-03-01");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([]));
        })
        .await;

    let service = service_for(&server);
    let filter = AttendanceFilter {
        employee_id: Some("EMP001".into()),
        from_date: NaiveDate::from_ymd_opt(2024, 3, 1),
        to_date: None,
    };
    service.list(&filter).await.expect("list succeeds");

    mock.assert_async().await;
}

#[tokio::test]
async fn mark_refetches_records_and_matching_summary() {
    let server = MockServer::start_async().await;

    let create_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/attendance")
                .json_body(json!({"employee_id": "EMP001", "date": "2024-03-04", "status": "Absent"}));
            then.status(201)
                .header("content-type", "application/json")
                .json_body(json!({"id": 11, "employee_id": "EMP001", "date": "2024-03-04", "status": "Absent"}));
        })
        .await;

    let list_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/attendance")
                .query_param("employee_id", "EMP001");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([
                    {"id": 11, "employee_id": "EMP001", "date": "2024-03-04", "status": "Absent"}
                ]));
        })
        .await;

    let summary_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/attendance/summary/EMP001");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"employee_id": "EMP001", "total_present_days": 4, "total_absent_days": 1}));
        })
        .await;

    let service = service_for(&server);
    let filter = AttendanceFilter {
        employee_id: Some("EMP001".into()),
        ..Default::default()
    };
    let input = AttendanceCreateInput {
        employee_id: "EMP001".into(),
        date: march_4(),
        status: AttendanceStatus::Absent,
    };

    let outcome = service.mark(input, &filter).await.expect("mark succeeds");

    create_mock.assert_async().await;
    list_mock.assert_async().await;
    summary_mock.assert_async().await;

    assert_eq!(outcome.records.len(), 1);
    let summary = outcome.summary.expect("summary refreshed for filtered employee");
    assert_eq!(summary.total_present_days, 4);
    assert_eq!(summary.total_absent_days, 1);
}

#[tokio::test]
async fn mark_skips_summary_when_filter_does_not_match() {
    let server = MockServer::start_async().await;

    let _create_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/attendance");
            then.status(201)
                .header("content-type", "application/json")
                .json_body(json!({"id": 12, "employee_id": "EMP002", "date": "2024-03-04", "status": "Present"}));
        })
        .await;

    let _list_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/attendance");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([]));
        })
        .await;

    let summary_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/attendance/summary/EMP002");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"employee_id": "EMP002", "total_present_days": 1, "total_absent_days": 0}));
        })
        .await;

    let service = service_for(&server);
    let input = AttendanceCreateInput {
        employee_id: "EMP002".into(),
        date: march_4(),
        status: AttendanceStatus::Present,
    };

    let outcome = service
        .mark(input, &AttendanceFilter::default())
        .await
        .expect("mark succeeds");

    assert!(outcome.summary.is_none());
    assert_eq!(summary_mock.hits_async().await, 0);
}

#[tokio::test]
async fn failed_summary_fetch_clears_the_panel() {
    let server = MockServer::start_async().await;

    let _summary_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/attendance/summary/EMP001");
            then.status(500)
                .header("content-type", "application/json")
                .json_body(json!({}));
        })
        .await;

    let service = service_for(&server);
    assert!(service.summary_or_none("EMP001").await.is_none());
}
