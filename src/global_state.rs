use crate::application::store::DashboardStore;
use crate::domain::dashboard::{DashboardAction, DashboardState};
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub dashboard: RwSignal<DashboardState>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals { dashboard: create_rw_signal(DashboardState::new()) })
}

crate::global_signals! {
    pub dashboard => dashboard: DashboardState,
}

/// Reactive store: every dispatch notifies the view once; a batch is one
/// notification. A disposed signal ignores writes and reads as `None`.
impl DashboardStore for RwSignal<DashboardState> {
    fn dispatch(&self, action: DashboardAction) -> bool {
        self.try_update(|state| state.apply(action)).unwrap_or(false)
    }

    fn dispatch_batch(&self, actions: Vec<DashboardAction>) -> usize {
        self.try_update(|state| state.apply_all(actions)).unwrap_or(0)
    }

    fn read<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}
