use std::rc::Rc;

use crate::application::store::DashboardStore;
use crate::domain::{
    dashboard::DashboardAction,
    logging::{LogComponent, get_logger},
    market_data::{DashboardApi, Pair},
};

/// Result of one chart fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartLoadOutcome {
    Loaded(usize),
    /// Fetch succeeded with no points
    Empty,
    /// Fetch failed; the chart shows the empty placeholder
    Failed,
    /// Another pair was selected or the modal closed before the response arrived
    Discarded,
}

/// Loads the price history behind the chart modal.
pub struct ChartLoader<A> {
    api: Rc<A>,
    limit: usize,
}

impl<A> Clone for ChartLoader<A> {
    fn clone(&self) -> Self {
        Self { api: Rc::clone(&self.api), limit: self.limit }
    }
}

impl<A: DashboardApi> ChartLoader<A> {
    pub fn new(api: Rc<A>, limit: usize) -> Self {
        Self { api, limit }
    }

    /// Selects `pair` and fetches its series. The previous series is dropped
    /// at selection time, and the response is applied only if the selection
    /// is still the one this call made.
    pub async fn open<S: DashboardStore>(&self, store: &S, pair: Pair) -> ChartLoadOutcome {
        store.dispatch(DashboardAction::SelectPair(pair.clone()));
        let Some(token) = store.read(|state| state.pending_chart_token()).flatten() else {
            return ChartLoadOutcome::Discarded;
        };

        let (points, outcome) = match self.api.fetch_candles(&pair, self.limit).await {
            Ok(points) if points.is_empty() => (points, ChartLoadOutcome::Empty),
            Ok(points) => {
                let count = points.len();
                (points, ChartLoadOutcome::Loaded(count))
            }
            Err(e) => {
                get_logger().error(
                    LogComponent::Application("ChartLoader"),
                    &format!("❌ Chart fetch error for {}: {}", pair, e),
                );
                (Vec::new(), ChartLoadOutcome::Failed)
            }
        };

        if store.dispatch(DashboardAction::SetChart { token, points }) {
            outcome
        } else {
            crate::log_debug!(
                LogComponent::Application("ChartLoader"),
                "🗑️ Discarding late response for {} (request {})",
                pair,
                token.value()
            );
            ChartLoadOutcome::Discarded
        }
    }

    /// Dismisses the modal and forgets the series.
    pub fn close<S: DashboardStore>(&self, store: &S) {
        store.dispatch(DashboardAction::ClearChart);
    }
}
