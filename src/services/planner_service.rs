use chrono::NaiveDate;

use crate::planner::{project, Bill, BillStatus, Portfolio, ProjectionPoint};

pub struct PlannerService;

impl PlannerService {
    /// Payoff trajectory for the portfolio's debts under the given extra
    /// monthly budget.
    pub fn project_payoff(
        portfolio: &Portfolio,
        extra_monthly_budget: f64,
        max_months: usize,
    ) -> Vec<ProjectionPoint> {
        project(&portfolio.debts, extra_monthly_budget, max_months)
    }

    /// Bills inside their remind window on `reference`, soonest due first.
    pub fn due_soon_bills(portfolio: &Portfolio, reference: NaiveDate) -> Vec<&Bill> {
        let mut due: Vec<&Bill> = portfolio
            .bills
            .iter()
            .filter(|bill| bill.status_on(reference) == BillStatus::DueSoon)
            .collect();
        due.sort_by_key(|bill| bill.days_until_due(reference));
        due
    }
}
