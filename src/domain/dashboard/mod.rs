//! Dashboard view state: the polled collections and the chart modal.

pub mod chart_view;
pub mod state;

pub use chart_view::*;
pub use state::*;
