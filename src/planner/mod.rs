//! Debt and bill planning domain: records, e-mandates, and payoff projection.

pub mod bill;
pub mod debt;
pub mod mandate;
pub mod portfolio;
pub mod projection;

pub use bill::{Bill, BillCycle, BillStatus};
pub use debt::{Debt, DebtKind, DebtStatus};
pub use mandate::{generate_mandate_id, Mandate, MandatePatch, MandateStatus};
pub use portfolio::Portfolio;
pub use projection::{project, ProjectionPoint, DEFAULT_HORIZON_MONTHS};
