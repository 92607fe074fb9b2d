//! Application services composed from the ports.

mod dashboard;
mod lifecycle;

pub use dashboard::{DashboardService, DashboardSummary};
pub use lifecycle::LifecycleService;
