use std::cmp::Ordering;

use serde::Serialize;

use super::debt::Debt;

pub const DEFAULT_HORIZON_MONTHS: usize = 36;

/// One point of the combined payoff trajectory, as charted by the planner.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectionPoint {
    /// 1-based simulated month.
    pub month: u32,
    pub label: String,
    pub total_balance: f64,
}

struct WorkingDebt {
    balance: f64,
    apr: f64,
    min_payment: f64,
}

/// Projects the month-by-month payoff of a debt set under the snowball
/// allocation, paying minimums everywhere and routing the rest of the budget
/// to the smallest debt first.
///
/// The allocation order is frozen at the start (ascending by starting
/// principal, stable) and is not re-sorted as balances cross over; monthly
/// re-sorting would change every downstream chart value.
///
/// The monthly budget is rebuilt each month from the original minimum
/// payments plus `extra_monthly_budget`; leftovers never carry over. Debts in
/// the caller's slice are never mutated.
pub fn project(
    debts: &[Debt],
    extra_monthly_budget: f64,
    max_months: usize,
) -> Vec<ProjectionPoint> {
    if debts.is_empty() {
        return Vec::new();
    }

    let mut working: Vec<WorkingDebt> = debts
        .iter()
        .map(|debt| WorkingDebt {
            balance: debt.principal,
            apr: debt.apr,
            min_payment: debt.min_payment,
        })
        .collect();

    let mut order: Vec<usize> = (0..working.len()).collect();
    order.sort_by(|&a, &b| {
        working[a]
            .balance
            .partial_cmp(&working[b].balance)
            .unwrap_or(Ordering::Equal)
    });

    // Original minimums stay in the budget even after a debt clears; that is
    // what makes the payoff snowball.
    let base_budget: f64 = working.iter().map(|debt| debt.min_payment).sum();
    let mut points = Vec::new();

    for month in 1..=max_months {
        let mut month_budget = base_budget + extra_monthly_budget;
        for &slot in &order {
            let debt = &mut working[slot];
            if debt.balance <= 0.0 {
                continue;
            }
            debt.balance = (debt.balance * (1.0 + debt.apr / 12.0 / 100.0)).round();
            let wanted = if month_budget > 0.0 {
                month_budget.min(debt.balance)
            } else {
                // Budget exhausted by earlier debts: the minimum is still due.
                debt.min_payment
            };
            let payment = debt.min_payment.max(wanted).min(debt.balance);
            debt.balance -= payment;
            month_budget -= payment;
        }

        let total_balance: f64 = working.iter().map(|debt| debt.balance).sum();
        points.push(ProjectionPoint {
            month: month as u32,
            label: format!("M{month}"),
            total_balance,
        });
        if total_balance <= 0.0 {
            break;
        }
    }

    points
}
