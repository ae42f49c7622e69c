pub use super::value_objects::{Pair, SignalKind, Timestamp};
use super::value_objects::null_as_default;
use serde::{Deserialize, Serialize};

/// Confidence above which a card's confidence figure is highlighted
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 70.0;

/// Domain entity - trading signal produced by the backend engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub pair: Pair,
    #[serde(default, deserialize_with = "null_as_default")]
    pub signal: SignalKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entry_price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stop_loss: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub take_profit: f64,
    /// 0-100
    #[serde(default, deserialize_with = "null_as_default")]
    pub confidence: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: Timestamp,
}

impl Signal {
    pub fn is_high_confidence(&self) -> bool {
        self.confidence > HIGH_CONFIDENCE_THRESHOLD
    }
}

/// Domain entity - market news headline with sentiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: Timestamp,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sentiment_score: f64,
}

/// Sign of a news sentiment score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl NewsItem {
    pub fn sentiment(&self) -> Sentiment {
        if self.sentiment_score > 0.0 {
            Sentiment::Positive
        } else if self.sentiment_score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

pub const STATUS_RUNNING: &str = "running";
pub const STATUS_OFFLINE: &str = "offline";
pub const STATUS_CONNECTING: &str = "connecting...";
pub const DATABASE_CONNECTED: &str = "connected";

/// Backend health as reported by `/api/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub mongodb: Option<DatabaseState>,
}

/// Database connectivity, sent either as a label or as a boolean flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatabaseState {
    Flag(bool),
    Label(String),
}

impl DatabaseState {
    pub fn is_connected(&self) -> bool {
        match self {
            DatabaseState::Flag(flag) => *flag,
            DatabaseState::Label(label) => label == DATABASE_CONNECTED,
        }
    }
}

impl StatusReport {
    /// Placeholder shown before the first poll completes
    pub fn connecting() -> Self {
        Self { status: STATUS_CONNECTING.to_string(), mongodb: None }
    }

    /// Sentinel substituted when the status read fails
    pub fn offline() -> Self {
        Self { status: STATUS_OFFLINE.to_string(), mongodb: None }
    }

    pub fn is_running(&self) -> bool {
        self.status == STATUS_RUNNING
    }

    pub fn is_offline(&self) -> bool {
        self.status == STATUS_OFFLINE
    }

    pub fn database_connected(&self) -> bool {
        self.mongodb.as_ref().is_some_and(DatabaseState::is_connected)
    }
}

impl Default for StatusReport {
    fn default() -> Self {
        Self::connecting()
    }
}

/// Closing price of one candle; the rest of the candle is not consumed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlePoint {
    pub time: Timestamp,
    pub close: f64,
}

impl CandlePoint {
    pub fn new(time: Timestamp, close: f64) -> Self {
        Self { time, close }
    }
}
