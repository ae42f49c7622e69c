use crate::domain::{
    errors::InfrastructureResult,
    market_data::{CandlePoint, NewsItem, Pair, Signal, StatusReport},
};

/// Backend the dashboard reads from.
///
/// Futures are polled on the browser's single thread, so no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    /// `GET /api/signals`
    async fn fetch_signals(&self) -> InfrastructureResult<Vec<Signal>>;

    /// `GET /api/news`
    async fn fetch_news(&self) -> InfrastructureResult<Vec<NewsItem>>;

    /// `GET /api/status`
    async fn fetch_status(&self) -> InfrastructureResult<StatusReport>;

    /// `POST /api/scan`; the response body is ignored
    async fn request_scan(&self) -> InfrastructureResult<()>;

    /// `GET /api/data/{pair}?limit={limit}`, oldest point first
    async fn fetch_candles(&self, pair: &Pair, limit: usize) -> InfrastructureResult<Vec<CandlePoint>>;
}
