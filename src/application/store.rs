use std::cell::RefCell;

use crate::domain::dashboard::{DashboardAction, DashboardState};

/// Owner of the dashboard state, written only through actions.
///
/// `read` returns `None` once the backing store is gone (the view was torn
/// down), which lets late async work drop its result.
pub trait DashboardStore {
    fn dispatch(&self, action: DashboardAction) -> bool;

    /// Applies every action in one transition so readers never observe a
    /// partially applied batch. Returns how many actions changed state.
    fn dispatch_batch(&self, actions: Vec<DashboardAction>) -> usize;

    fn read<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> Option<R>;
}

impl DashboardStore for RefCell<DashboardState> {
    fn dispatch(&self, action: DashboardAction) -> bool {
        self.borrow_mut().apply(action)
    }

    fn dispatch_batch(&self, actions: Vec<DashboardAction>) -> usize {
        self.borrow_mut().apply_all(actions)
    }

    fn read<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

impl<S: DashboardStore> DashboardStore for std::rc::Rc<S> {
    fn dispatch(&self, action: DashboardAction) -> bool {
        self.as_ref().dispatch(action)
    }

    fn dispatch_batch(&self, actions: Vec<DashboardAction>) -> usize {
        self.as_ref().dispatch_batch(actions)
    }

    fn read<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> Option<R> {
        self.as_ref().read(f)
    }
}
