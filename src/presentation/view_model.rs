use crate::domain::{
    dashboard::{ChartView, DashboardState},
    market_data::{NewsItem, Pair, Sentiment, Signal, SignalKind, StatusReport, Timestamp},
};

/// Styling family of a signal card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVariant {
    Buy,
    Sell,
    Neutral,
}

impl CardVariant {
    pub fn modifier(&self) -> &'static str {
        match self {
            CardVariant::Buy => "buy",
            CardVariant::Sell => "sell",
            CardVariant::Neutral => "neutral",
        }
    }

    pub fn card_class(&self) -> String {
        format!("signal-card signal-card--{}", self.modifier())
    }

    pub fn badge_class(&self) -> String {
        format!("signal-badge signal-badge--{}", self.modifier())
    }
}

impl From<SignalKind> for CardVariant {
    fn from(kind: SignalKind) -> Self {
        match kind {
            SignalKind::Buy => CardVariant::Buy,
            SignalKind::Sell => CardVariant::Sell,
            SignalKind::Wait => CardVariant::Neutral,
        }
    }
}

/// Everything a signal card displays
#[derive(Debug, Clone, PartialEq)]
pub struct SignalCardModel {
    pub pair: Pair,
    pub label: String,
    pub variant: CardVariant,
    pub entry_price: String,
    pub confidence: String,
    pub confidence_highlight: bool,
    /// Stop-loss / take-profit block; hidden for WAIT
    pub risk_levels: Option<(String, String)>,
    pub reason: String,
    pub time: Timestamp,
}

impl From<&Signal> for SignalCardModel {
    fn from(signal: &Signal) -> Self {
        let risk_levels = signal
            .signal
            .is_actionable()
            .then(|| (signal.stop_loss.to_string(), signal.take_profit.to_string()));

        Self {
            pair: signal.pair.clone(),
            label: signal.signal.to_string(),
            variant: CardVariant::from(signal.signal),
            entry_price: signal.entry_price.to_string(),
            confidence: format!("{}%", signal.confidence),
            confidence_highlight: signal.is_high_confidence(),
            risk_levels,
            reason: signal.reason.clone(),
            time: signal.time.clone(),
        }
    }
}

impl SignalCardModel {
    pub fn confidence_class(&self) -> &'static str {
        if self.confidence_highlight { "confidence confidence--high" } else { "confidence" }
    }
}

pub fn sentiment_class(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "sentiment-dot sentiment-dot--positive",
        Sentiment::Negative => "sentiment-dot sentiment-dot--negative",
        Sentiment::Neutral => "sentiment-dot sentiment-dot--neutral",
    }
}

/// One row of the news feed
#[derive(Debug, Clone, PartialEq)]
pub struct NewsItemModel {
    pub title: String,
    pub source: String,
    pub date: Timestamp,
    pub dot_class: &'static str,
}

impl From<&NewsItem> for NewsItemModel {
    fn from(item: &NewsItem) -> Self {
        Self {
            title: item.title.clone(),
            source: item.source.clone(),
            date: item.date.clone(),
            dot_class: sentiment_class(item.sentiment()),
        }
    }
}

/// Header badges for backend and database health
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderStatusModel {
    pub status_text: String,
    pub status_ok: bool,
    pub database_label: &'static str,
    pub database_ok: bool,
}

impl From<&StatusReport> for HeaderStatusModel {
    fn from(status: &StatusReport) -> Self {
        let database_ok = status.database_connected();
        Self {
            status_text: status.status.to_uppercase(),
            status_ok: status.is_running(),
            database_label: if database_ok { "MONGO" } else { "ERROR" },
            database_ok,
        }
    }
}

pub fn health_class(ok: bool) -> &'static str {
    if ok { "health health--ok" } else { "health health--bad" }
}

/// What the chart modal shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartBody {
    /// No pair selected, modal not rendered
    Hidden,
    Spinner,
    Plot,
    /// "No historical data" placeholder, for empty and failed fetches alike
    NoData,
}

impl From<&ChartView> for ChartBody {
    fn from(view: &ChartView) -> Self {
        match view {
            ChartView::Idle => ChartBody::Hidden,
            ChartView::Loading { .. } => ChartBody::Spinner,
            ChartView::Loaded { .. } => ChartBody::Plot,
            ChartView::Empty { .. } => ChartBody::NoData,
        }
    }
}

pub const NO_CHART_DATA_MESSAGE: &str = "No historical data available for this chart yet.";
pub const NO_SIGNALS_MESSAGE: &str = "Start the engine or click Scan Now to generate signals.";

/// The empty-grid hint is hidden while a refresh is running.
pub fn show_no_signals_hint(state: &DashboardState) -> bool {
    state.signals().is_empty() && !state.is_refreshing()
}
