use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::{Rc, Weak};
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};
use gloo::timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

use crate::domain::logging::{LogComponent, get_logger};

#[derive(Default)]
struct ScopeTasks {
    next_id: u64,
    handles: HashMap<u64, AbortHandle>,
}

/// Owns the async work of a mounted view. Dropping the scope aborts every
/// task spawned through it that has not finished yet.
#[derive(Default)]
pub struct TaskScope {
    tasks: Rc<RefCell<ScopeTasks>>,
}

/// Cloneable handle for spawning into a [`TaskScope`]. Spawning after the
/// scope is dropped is a no-op.
#[derive(Clone)]
pub struct ScopeSpawner {
    tasks: Weak<RefCell<ScopeTasks>>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawner(&self) -> ScopeSpawner {
        ScopeSpawner { tasks: Rc::downgrade(&self.tasks) }
    }

    pub fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        self.spawner().spawn(task);
    }

    /// Tasks spawned and not yet finished or aborted.
    pub fn active_tasks(&self) -> usize {
        self.tasks.borrow().handles.len()
    }

    pub fn abort_all(&self) {
        let handles: Vec<AbortHandle> = self.tasks.borrow_mut().handles.drain().map(|(_, handle)| handle).collect();
        if !handles.is_empty() {
            get_logger().debug(
                LogComponent::Application("TaskScope"),
                &format!("🛑 Aborting {} pending tasks", handles.len()),
            );
        }
        for handle in handles {
            handle.abort();
        }
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        self.abort_all();
    }
}

impl ScopeSpawner {
    pub fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        let Some(tasks) = self.tasks.upgrade() else {
            return;
        };

        let (handle, registration) = AbortHandle::new_pair();
        let id = {
            let mut tasks = tasks.borrow_mut();
            let id = tasks.next_id;
            tasks.next_id += 1;
            tasks.handles.insert(id, handle);
            id
        };

        let tasks = Rc::downgrade(&tasks);
        spawn_local(async move {
            let _ = Abortable::new(task, registration).await;
            if let Some(tasks) = tasks.upgrade() {
                tasks.borrow_mut().handles.remove(&id);
            }
        });
    }

    pub fn is_alive(&self) -> bool {
        self.tasks.strong_count() > 0
    }
}

/// Repeating refresh tied to a view's lifetime: one tick right away, then
/// one per period. `tick` itself is called synchronously; only the future it
/// returns is spawned. Dropping the handle cancels the timer and aborts every
/// tick or task still in flight.
pub struct PollingHandle {
    _interval: Interval,
    scope: TaskScope,
}

impl PollingHandle {
    pub fn start<F, Fut>(period: Duration, tick: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let scope = TaskScope::new();
        let spawner = scope.spawner();
        spawner.spawn(tick());

        let period_ms = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        let interval = Interval::new(period_ms, move || spawner.spawn(tick()));

        crate::log_info!(LogComponent::Application("Polling"), "⏱️ Polling every {} ms", period_ms);
        Self { _interval: interval, scope }
    }

    /// Spawner for other work that must stop with the poller (scan, chart loads).
    pub fn spawner(&self) -> ScopeSpawner {
        self.scope.spawner()
    }

    pub fn active_tasks(&self) -> usize {
        self.scope.active_tasks()
    }
}

impl Drop for PollingHandle {
    fn drop(&mut self) {
        get_logger().info(LogComponent::Application("Polling"), "⏹️ Polling stopped");
    }
}
