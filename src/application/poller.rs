use std::future::Future;
use std::rc::Rc;

use crate::application::store::DashboardStore;
use crate::domain::{
    dashboard::DashboardAction,
    logging::{LogComponent, get_logger},
    market_data::{DashboardApi, StatusReport},
};

/// What one poll cycle committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshOutcome {
    /// Signals and news were replaced with this cycle's data
    pub collections_replaced: bool,
    /// The status read failed and the offline sentinel was shown
    pub status_offline: bool,
}

/// Poll cycle: signals, news and status read concurrently, committed together.
pub struct Poller<A> {
    api: Rc<A>,
}

impl<A> Clone for Poller<A> {
    fn clone(&self) -> Self {
        Self { api: Rc::clone(&self.api) }
    }
}

impl<A: DashboardApi> Poller<A> {
    pub fn new(api: Rc<A>) -> Self {
        Self { api }
    }

    /// Runs one cycle.
    ///
    /// A failed status read becomes `StatusReport::offline()`. Signals and
    /// news are replaced only when both reads succeed; otherwise the previous
    /// collections stay on screen. Status is committed either way.
    pub async fn refresh<S: DashboardStore>(&self, store: &S) -> RefreshOutcome {
        store.dispatch(DashboardAction::RefreshStarted);
        self.complete(store).await
    }

    /// Marks a cycle as in flight before returning, so the view never renders
    /// an idle empty state ahead of the first fetch. The returned future runs
    /// the rest of the cycle.
    pub fn start_refresh<S>(&self, store: S) -> impl Future<Output = RefreshOutcome> + use<A, S> + 'static
    where
        S: DashboardStore + 'static,
        A: 'static,
    {
        store.dispatch(DashboardAction::RefreshStarted);
        let poller = self.clone();
        async move { poller.complete(&store).await }
    }

    async fn complete<S: DashboardStore>(&self, store: &S) -> RefreshOutcome {
        let (signals, news, status) =
            futures::join!(self.api.fetch_signals(), self.api.fetch_news(), self.api.fetch_status());

        let status_offline = status.is_err();
        let status = status.unwrap_or_else(|e| {
            get_logger().warn(
                LogComponent::Application("Poller"),
                &format!("⚠️ Status unavailable, showing offline: {}", e),
            );
            StatusReport::offline()
        });

        let mut actions = Vec::with_capacity(4);
        let collections_replaced = match (signals, news) {
            (Ok(signals), Ok(news)) => {
                get_logger().debug(
                    LogComponent::Application("Poller"),
                    &format!("🔄 {} signals, {} news items", signals.len(), news.len()),
                );
                actions.push(DashboardAction::SetSignals(signals));
                actions.push(DashboardAction::SetNews(news));
                true
            }
            (signals, news) => {
                for error in [signals.err(), news.err()].into_iter().flatten() {
                    get_logger().error(
                        LogComponent::Application("Poller"),
                        &format!("❌ Error fetching data, keeping previous: {}", error),
                    );
                }
                false
            }
        };
        actions.push(DashboardAction::SetStatus(status));
        actions.push(DashboardAction::RefreshFinished);
        store.dispatch_batch(actions);

        RefreshOutcome { collections_replaced, status_offline }
    }
}
