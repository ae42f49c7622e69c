use serde::Deserialize;
use std::time::Duration;

use crate::domain::{
    errors::ConfigurationError,
    logging::{LogComponent, get_logger},
};

pub const DEFAULT_POLL_INTERVAL_MS: u32 = 15_000;
pub const DEFAULT_SCAN_REFRESH_DELAY_MS: u32 = 4_000;
pub const DEFAULT_CHART_HISTORY_LIMIT: usize = 100;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Id of the optional `<script type="application/json">` element carrying overrides
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Runtime settings of the dashboard.
///
/// Resolved as defaults, then the `DASHBOARD_API_URL` build variable, then
/// the JSON document embedded in the host page.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Empty means same origin (`/api/...`)
    pub api_base_url: String,
    pub poll_interval_ms: u32,
    pub scan_refresh_delay_ms: u32,
    pub chart_history_limit: usize,
    pub request_timeout_ms: u32,
}

/// Partial document; absent keys keep the current value.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigOverrides {
    api_base_url: Option<String>,
    poll_interval_ms: Option<u32>,
    scan_refresh_delay_ms: Option<u32>,
    chart_history_limit: Option<usize>,
    request_timeout_ms: Option<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            scan_refresh_delay_ms: DEFAULT_SCAN_REFRESH_DELAY_MS,
            chart_history_limit: DEFAULT_CHART_HISTORY_LIMIT,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::default().with_api_base_url(option_env!("DASHBOARD_API_URL").unwrap_or_default())
    }

    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_poll_interval_ms(mut self, interval_ms: u32) -> Self {
        self.poll_interval_ms = interval_ms;
        self
    }

    pub fn with_scan_refresh_delay_ms(mut self, delay_ms: u32) -> Self {
        self.scan_refresh_delay_ms = delay_ms;
        self
    }

    /// Overlays a JSON document such as `{"api_base_url": "http://localhost:8000"}`.
    pub fn merge_json(self, json: &str) -> Result<Self, ConfigurationError> {
        let overrides: ConfigOverrides =
            serde_json::from_str(json).map_err(|e| ConfigurationError::MalformedDocument(e.to_string()))?;

        let mut config = self;
        if let Some(url) = overrides.api_base_url {
            config = config.with_api_base_url(&url);
        }
        if let Some(interval) = overrides.poll_interval_ms {
            config.poll_interval_ms = interval;
        }
        if let Some(delay) = overrides.scan_refresh_delay_ms {
            config.scan_refresh_delay_ms = delay;
        }
        if let Some(limit) = overrides.chart_history_limit {
            config.chart_history_limit = limit;
        }
        if let Some(timeout) = overrides.request_timeout_ms {
            config.request_timeout_ms = timeout;
        }
        config.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigurationError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigurationError::InvalidParameter("poll_interval_ms must be positive".to_string()));
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigurationError::InvalidParameter("request_timeout_ms must be positive".to_string()));
        }
        if self.chart_history_limit == 0 {
            return Err(ConfigurationError::InvalidParameter("chart_history_limit must be positive".to_string()));
        }
        Ok(self)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.poll_interval_ms))
    }

    pub fn scan_refresh_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.scan_refresh_delay_ms))
    }

    /// Browser entry point: build defaults plus the page's embedded overrides.
    /// A malformed document is logged and ignored.
    pub fn load() -> Self {
        let base = Self::from_build_env();
        let Some(document) = Self::embedded_document() else {
            return base;
        };

        match base.clone().merge_json(&document) {
            Ok(config) => {
                get_logger().info(
                    LogComponent::Infrastructure("Config"),
                    &format!("⚙️ Loaded page config, API base '{}'", config.api_base_url),
                );
                config
            }
            Err(e) => {
                crate::log_warn!(LogComponent::Infrastructure("Config"), "⚠️ Ignoring page config: {}", e);
                base
            }
        }
    }

    fn embedded_document() -> Option<String> {
        let document = web_sys::window()?.document()?;
        let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
        element.text_content().filter(|text| !text.trim().is_empty())
    }
}
