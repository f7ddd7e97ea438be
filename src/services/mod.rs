//! Stateless service facades the demo screens call into.

pub mod leaderboard_service;
pub mod mandate_service;
pub mod planner_service;

pub use leaderboard_service::{LeaderboardReport, LeaderboardService};
pub use mandate_service::MandateService;
pub use planner_service::PlannerService;
