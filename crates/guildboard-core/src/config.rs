//! Engine configuration

use std::time::Duration;

/// Configuration for the dashboard engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Base URL of the statistics API
    pub base_url: String,

    /// Delay between the last keystroke and the search request
    pub search_debounce: Duration,

    /// Per-request timeout for the HTTP client
    pub request_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.guildboard.dev".to_string(),
            search_debounce: Duration::from_millis(300),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl EngineConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_search_debounce(mut self, debounce: Duration) -> Self {
        self.search_debounce = debounce;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
