use crate::domain::dashboard::chart_view::{ChartState, ChartToken, ChartView};
use crate::domain::market_data::{CandlePoint, NewsItem, Pair, Signal, StatusReport};

/// Update actions. Each one is the only writer of its slice.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    SetSignals(Vec<Signal>),
    SetNews(Vec<NewsItem>),
    SetStatus(StatusReport),
    RefreshStarted,
    RefreshFinished,
    SelectPair(Pair),
    SetChart { token: ChartToken, points: Vec<CandlePoint> },
    ClearChart,
}

impl DashboardAction {
    pub fn name(&self) -> &'static str {
        match self {
            DashboardAction::SetSignals(_) => "SET_SIGNALS",
            DashboardAction::SetNews(_) => "SET_NEWS",
            DashboardAction::SetStatus(_) => "SET_STATUS",
            DashboardAction::RefreshStarted => "REFRESH_STARTED",
            DashboardAction::RefreshFinished => "REFRESH_FINISHED",
            DashboardAction::SelectPair(_) => "SELECT_PAIR",
            DashboardAction::SetChart { .. } => "SET_CHART",
            DashboardAction::ClearChart => "CLEAR_CHART",
        }
    }
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    signals: Vec<Signal>,
    news: Vec<NewsItem>,
    status: StatusReport,
    refreshes_in_flight: u32,
    chart: ChartState,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }

    pub fn status(&self) -> &StatusReport {
        &self.status
    }

    pub fn chart(&self) -> &ChartView {
        self.chart.view()
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshes_in_flight > 0
    }

    /// Token of the chart fetch currently awaited, if any.
    pub fn pending_chart_token(&self) -> Option<ChartToken> {
        self.chart.view().pending_token()
    }

    /// Applies `action`; returns whether state changed.
    pub fn apply(&mut self, action: DashboardAction) -> bool {
        match action {
            DashboardAction::SetSignals(signals) => {
                self.signals = signals;
                true
            }
            DashboardAction::SetNews(news) => {
                self.news = news;
                true
            }
            DashboardAction::SetStatus(status) => {
                self.status = status;
                true
            }
            DashboardAction::RefreshStarted => {
                self.refreshes_in_flight = self.refreshes_in_flight.saturating_add(1);
                true
            }
            DashboardAction::RefreshFinished => {
                let before = self.refreshes_in_flight;
                self.refreshes_in_flight = before.saturating_sub(1);
                before != self.refreshes_in_flight
            }
            DashboardAction::SelectPair(pair) => {
                self.chart.select(pair);
                true
            }
            DashboardAction::SetChart { token, points } => self.chart.resolve(token, points),
            DashboardAction::ClearChart => self.chart.clear(),
        }
    }

    /// Applies actions in order; returns how many changed state.
    pub fn apply_all(&mut self, actions: impl IntoIterator<Item = DashboardAction>) -> usize {
        actions.into_iter().map(|action| self.apply(action)).filter(|changed| *changed).count()
    }
}
