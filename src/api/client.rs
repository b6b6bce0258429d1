use std::time::Instant;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};

/// Single chokepoint for all network access. Holds a `reqwest::Client` and
/// the configured base URL; every remote call in the app goes through
/// `get`/`post`/`delete` and comes back as untyped JSON or as the one
/// normalized error the rest of the app relies on.
///
/// Deliberately minimal: no retries, no timeouts, no cancellation. Each call
/// is a single best-effort attempt; callers own any retry policy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| AppError::other(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> AppResult<JsonValue> {
        self.execute(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: &JsonValue) -> AppResult<JsonValue> {
        self.execute(Method::POST, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> AppResult<JsonValue> {
        self.execute(Method::DELETE, path, None).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&JsonValue>,
    ) -> AppResult<JsonValue> {
        let correlation_id = Uuid::new_v4();
        let url = join_url(&self.base_url, path);

        debug!(
            target: "app::api",
            method = %method,
            %url,
            correlation_id = %correlation_id,
            "issuing request"
        );

        let mut request = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let start = Instant::now();
        // Transport failures (connection refused, DNS) propagate as-is.
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let payload = parse_or_empty(&text);

        if !status.is_success() {
            let message = error_message(status, &payload);
            warn!(
                target: "app::api",
                status = status.as_u16(),
                correlation_id = %correlation_id,
                %message,
                "request failed"
            );
            return Err(AppError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(
            target: "app::api",
            status = status.as_u16(),
            correlation_id = %correlation_id,
            latency_ms = start.elapsed().as_millis() as u64,
            "request succeeded"
        );

        Ok(payload)
    }
}

/// Joins the base URL and a relative path with exactly one slash at the
/// boundary, whatever combination of trailing/leading slashes the inputs
/// carry.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Parses a response body as JSON, substituting an empty object when the
/// body is empty or not valid JSON. Success paths and error-message
/// extraction both rely on this never raising.
fn parse_or_empty(body: &str) -> JsonValue {
    serde_json::from_str(body).unwrap_or_else(|_| json!({}))
}

/// Builds the human-readable message for a non-2xx response.
///
/// Precedence: a `detail` array joins each element's `msg` (or the
/// JSON-stringified element) with `", "`; a present `detail` is used
/// directly; otherwise the status's canonical reason phrase; otherwise a
/// generic fallback. A falsy `detail` (null, empty string, zero, false)
/// counts as absent.
fn error_message(status: StatusCode, payload: &JsonValue) -> String {
    let fallback = || {
        status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| "Request failed".to_string())
    };

    match payload.get("detail") {
        Some(JsonValue::Array(items)) => items
            .iter()
            .map(|item| match item.get("msg").and_then(JsonValue::as_str) {
                Some(msg) => msg.to_string(),
                None => item.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(detail) if is_falsy(detail) => fallback(),
        Some(JsonValue::String(detail)) => detail.clone(),
        Some(other) => other.to_string(),
        None => fallback(),
    }
}

fn is_falsy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Bool(flag) => !flag,
        JsonValue::String(text) => text.is_empty(),
        JsonValue::Number(number) => number.as_f64() == Some(0.0),
        _ => false,
    }
}
