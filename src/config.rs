const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Remote API configuration, read from the environment exactly once at
/// startup and injected into the `ApiClient` constructor. Request logic
/// never touches the environment itself.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url = std::env::var("STAFFDESK_API_BASE_URL")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self { base_url }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}
