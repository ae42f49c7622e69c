use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;

use crate::application::{
    poller::{Poller, RefreshOutcome},
    store::DashboardStore,
};
use crate::domain::{
    dashboard::DashboardAction,
    logging::LogComponent,
    market_data::DashboardApi,
};

/// Result of a manual scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOutcome {
    pub scan_accepted: bool,
    pub refresh: RefreshOutcome,
}

/// Asks the backend to recompute signals, then re-polls once after a fixed
/// delay. The delay is a guess at how long the backend needs; nothing
/// confirms the scan has finished.
pub struct ScanUseCase<A> {
    poller: Poller<A>,
    api: Rc<A>,
    follow_up_delay: Duration,
}

impl<A> Clone for ScanUseCase<A> {
    fn clone(&self) -> Self {
        Self {
            poller: self.poller.clone(),
            api: Rc::clone(&self.api),
            follow_up_delay: self.follow_up_delay,
        }
    }
}

impl<A: DashboardApi> ScanUseCase<A> {
    pub fn new(api: Rc<A>, follow_up_delay: Duration) -> Self {
        Self { poller: Poller::new(Rc::clone(&api)), api, follow_up_delay }
    }

    /// One scan request, then exactly one refresh after the delay. The
    /// refresh runs even when the scan request fails.
    pub async fn run<S: DashboardStore>(&self, store: &S) -> ScanOutcome {
        store.dispatch(DashboardAction::RefreshStarted);

        let scan_accepted = match self.api.request_scan().await {
            Ok(()) => true,
            Err(e) => {
                crate::log_error!(LogComponent::Application("Scan"), "❌ Scan request failed: {}", e);
                false
            }
        };

        sleep(self.follow_up_delay).await;
        let refresh = self.poller.refresh(store).await;
        store.dispatch(DashboardAction::RefreshFinished);

        ScanOutcome { scan_accepted, refresh }
    }
}
