pub mod chart_loader;
pub mod poller;
pub mod scan;
pub mod store;
pub mod tasks;

pub use chart_loader::*;
pub use poller::*;
pub use scan::*;
pub use store::*;
pub use tasks::*;
