#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use futures::channel::oneshot;
use signal_dashboard_wasm::domain::errors::{InfrastructureError, InfrastructureResult, NetworkError};
use signal_dashboard_wasm::domain::market_data::{
    CandlePoint, DashboardApi, NewsItem, Pair, Signal, SignalKind, StatusReport, Timestamp,
};

/// Reply to a single candle request
pub enum CandleReply {
    Ready(InfrastructureResult<Vec<CandlePoint>>),
    /// Resolved later through the paired sender; a dropped sender is a network error
    Pending(oneshot::Receiver<InfrastructureResult<Vec<CandlePoint>>>),
}

/// Scripted backend. Each endpoint returns its current scripted result;
/// candle replies are consumed in request order.
pub struct FakeApi {
    pub signals: RefCell<InfrastructureResult<Vec<Signal>>>,
    pub news: RefCell<InfrastructureResult<Vec<NewsItem>>>,
    pub status: RefCell<InfrastructureResult<StatusReport>>,
    pub scan: RefCell<InfrastructureResult<()>>,
    pub candle_replies: RefCell<VecDeque<CandleReply>>,

    pub signal_calls: Cell<u32>,
    pub news_calls: Cell<u32>,
    pub status_calls: Cell<u32>,
    pub scan_calls: Cell<u32>,
    pub candle_requests: RefCell<Vec<(String, usize)>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            signals: RefCell::new(Ok(Vec::new())),
            news: RefCell::new(Ok(Vec::new())),
            status: RefCell::new(Ok(running())),
            scan: RefCell::new(Ok(())),
            candle_replies: RefCell::new(VecDeque::new()),
            signal_calls: Cell::new(0),
            news_calls: Cell::new(0),
            status_calls: Cell::new(0),
            scan_calls: Cell::new(0),
            candle_requests: RefCell::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub fn push_candles(&self, reply: InfrastructureResult<Vec<CandlePoint>>) {
        self.candle_replies.borrow_mut().push_back(CandleReply::Ready(reply));
    }

    pub fn push_pending_candles(&self) -> oneshot::Sender<InfrastructureResult<Vec<CandlePoint>>> {
        let (tx, rx) = oneshot::channel();
        self.candle_replies.borrow_mut().push_back(CandleReply::Pending(rx));
        tx
    }
}

impl DashboardApi for FakeApi {
    async fn fetch_signals(&self) -> InfrastructureResult<Vec<Signal>> {
        self.signal_calls.set(self.signal_calls.get() + 1);
        self.signals.borrow().clone()
    }

    async fn fetch_news(&self) -> InfrastructureResult<Vec<NewsItem>> {
        self.news_calls.set(self.news_calls.get() + 1);
        self.news.borrow().clone()
    }

    async fn fetch_status(&self) -> InfrastructureResult<StatusReport> {
        self.status_calls.set(self.status_calls.get() + 1);
        self.status.borrow().clone()
    }

    async fn request_scan(&self) -> InfrastructureResult<()> {
        self.scan_calls.set(self.scan_calls.get() + 1);
        self.scan.borrow().clone()
    }

    async fn fetch_candles(&self, pair: &Pair, limit: usize) -> InfrastructureResult<Vec<CandlePoint>> {
        self.candle_requests.borrow_mut().push((pair.to_string(), limit));
        let reply = self.candle_replies.borrow_mut().pop_front();
        match reply {
            Some(CandleReply::Ready(result)) => result,
            Some(CandleReply::Pending(rx)) => rx.await.unwrap_or_else(|_| Err(server_error())),
            None => Ok(Vec::new()),
        }
    }
}

pub fn server_error() -> InfrastructureError {
    InfrastructureError::Network(NetworkError::HttpStatus { status: 500, text: "Internal Server Error".to_string() })
}

pub fn running() -> StatusReport {
    serde_json::from_str(r#"{"status":"running","mongodb":"connected"}"#).expect("status fixture")
}

pub fn pair(value: &str) -> Pair {
    Pair::new(value.to_string()).expect("valid pair")
}

pub fn signal(symbol: &str, kind: SignalKind, confidence: f64) -> Signal {
    Signal {
        pair: pair(symbol),
        signal: kind,
        entry_price: 1.0845,
        stop_loss: 1.0800,
        take_profit: 1.0950,
        confidence,
        reason: "RSI oversold with bullish divergence".to_string(),
        time: Timestamp::from("2024-05-01T12:00:00Z"),
    }
}

pub fn news(title: &str, sentiment_score: f64) -> NewsItem {
    NewsItem {
        title: title.to_string(),
        source: "Reuters".to_string(),
        date: Timestamp::from("2024-05-01T12:30:00Z"),
        sentiment_score,
    }
}

pub fn candles(closes: &[f64]) -> Vec<CandlePoint> {
    closes
        .iter()
        .enumerate()
        .map(|(i, close)| CandlePoint::new(Timestamp::from_millis(1_714_564_800_000.0 + i as f64 * 900_000.0), *close))
        .collect()
}
