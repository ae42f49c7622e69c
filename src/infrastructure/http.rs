use crate::config::{AppConfig, DEFAULT_REQUEST_TIMEOUT_MS};
use crate::domain::{
    errors::{InfrastructureError, InfrastructureResult, NetworkError},
    logging::{LogComponent, LogLevel, get_logger},
    market_data::{CandlePoint, DashboardApi, NewsItem, Pair, Signal, StatusReport},
};
use futures::future::{self, Either};
use gloo::net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::pin::pin;

/// HTTP client for the signal engine backend
#[derive(Clone, Debug)]
pub struct DashboardHttpClient {
    base_url: String,
    timeout_ms: u32,
}

impl DashboardHttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone()).with_timeout(config.request_timeout_ms)
    }

    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Path of the candle endpoint for `pair`, with the pair percent-encoded.
    pub fn candles_path(pair: &Pair) -> String {
        let encoded: String = js_sys::encode_uri_component(pair.value()).into();
        format!("api/data/{}", encoded)
    }

    /// Sends the request and checks the status. Callers bound it with [`race_timeout`].
    async fn send(&self, request: RequestBuilder, url: &str) -> InfrastructureResult<Response> {
        crate::log_trace!(LogComponent::Infrastructure("HTTP"), "🌐 {}", url);

        let response = request.send().await.map_err(request_failed)?;

        if !response.ok() {
            let error = NetworkError::HttpStatus { status: response.status(), text: response.status_text() };
            get_logger().log_with_metadata(
                LogLevel::Warn,
                LogComponent::Infrastructure("HTTP"),
                &error.to_string(),
                url,
            );
            return Err(error.into());
        }

        Ok(response)
    }

    async fn read_body(&self, request: RequestBuilder, url: &str) -> InfrastructureResult<String> {
        let response = self.send(request, url).await?;
        response.text().await.map_err(request_failed)
    }

    /// Headers and body share one deadline.
    async fn get_text(&self, request: RequestBuilder, url: &str) -> InfrastructureResult<String> {
        race_timeout(self.read_body(request, url), self.timeout_ms).await
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder, url: &str) -> InfrastructureResult<T> {
        decode(&self.get_text(request, url).await?)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> InfrastructureResult<Vec<T>> {
        let url = self.url(path);
        decode_list(&self.get_text(Request::get(&url), &url).await?)
    }
}

fn request_failed(error: gloo::net::Error) -> InfrastructureError {
    InfrastructureError::Network(NetworkError::HttpRequestFailed(format!("{:?}", error)))
}

/// Resolves `request`, or fails with `NetworkError::Timeout` once `timeout_ms` elapses.
pub async fn race_timeout<T>(
    request: impl Future<Output = InfrastructureResult<T>>,
    timeout_ms: u32,
) -> InfrastructureResult<T> {
    let request = pin!(request);
    let timer = pin!(TimeoutFuture::new(timeout_ms));
    match future::select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(NetworkError::Timeout { after_ms: timeout_ms }.into()),
    }
}

/// Decodes a JSON body, mapping failures to `InfrastructureError::Decode`.
pub fn decode<T: DeserializeOwned>(body: &str) -> InfrastructureResult<T> {
    Ok(serde_json::from_str(body)?)
}

/// Decodes a list body. `null` reads as empty; rows that fail to decode are
/// dropped with a warning so one bad row does not discard the rest.
pub fn decode_list<T: DeserializeOwned>(body: &str) -> InfrastructureResult<Vec<T>> {
    let rows: Option<Vec<serde_json::Value>> = decode(body)?;
    let rows = rows.unwrap_or_default();
    let total = rows.len();

    let items: Vec<T> = rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value(row) {
            Ok(item) => Some(item),
            Err(e) => {
                crate::log_warn!(LogComponent::Infrastructure("HTTP"), "Skipping malformed row: {}", e);
                None
            }
        })
        .collect();

    if items.len() < total {
        crate::log_debug!(
            LogComponent::Infrastructure("HTTP"),
            "Kept {} of {} rows",
            items.len(),
            total
        );
    }
    Ok(items)
}

impl DashboardApi for DashboardHttpClient {
    async fn fetch_signals(&self) -> InfrastructureResult<Vec<Signal>> {
        self.get_list("api/signals").await
    }

    async fn fetch_news(&self) -> InfrastructureResult<Vec<NewsItem>> {
        self.get_list("api/news").await
    }

    async fn fetch_status(&self) -> InfrastructureResult<StatusReport> {
        let url = self.url("api/status");
        self.get_json(Request::get(&url), &url).await
    }

    async fn request_scan(&self) -> InfrastructureResult<()> {
        let url = self.url("api/scan");
        race_timeout(self.send(Request::post(&url), &url), self.timeout_ms).await?;
        get_logger().info(LogComponent::Infrastructure("HTTP"), "🔎 Scan requested");
        Ok(())
    }

    async fn fetch_candles(&self, pair: &Pair, limit: usize) -> InfrastructureResult<Vec<CandlePoint>> {
        let url = self.url(&Self::candles_path(pair));
        let limit = limit.to_string();
        let request = Request::get(&url).query([("limit", limit.as_str())]);
        let points: Vec<CandlePoint> = decode_list(&self.get_text(request, &url).await?)?;

        get_logger().info(
            LogComponent::Infrastructure("HTTP"),
            &format!("✅ Fetched {} candles for {}", points.len(), pair),
        );
        Ok(points)
    }
}
