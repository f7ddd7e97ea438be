use serde::Serialize;

use crate::leaderboard::{
    aggregate, rank, tier_for, AggregateRow, BadgeRule, ChannelFilter, CountryAggregate,
    PeriodKey, SpendBook, TierLadder, TierStatus,
};

/// Everything the leaderboard screen renders for one period/filter query.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LeaderboardReport {
    pub period: PeriodKey,
    pub rows: Vec<AggregateRow>,
    pub countries: Vec<CountryAggregate>,
    pub period_total: f64,
    pub user_count: usize,
}

pub struct LeaderboardService;

impl LeaderboardService {
    pub fn build(
        book: &SpendBook,
        period: &PeriodKey,
        filter: ChannelFilter,
        ladder: &TierLadder,
        rules: &[BadgeRule],
    ) -> LeaderboardReport {
        let report = aggregate(&book.transactions, period, filter);
        let rows = rank(&report.per_user, &book.users, ladder, rules);
        tracing::debug!(
            period = %period,
            users = rows.len(),
            total = report.period_total,
            "leaderboard rebuilt"
        );
        LeaderboardReport {
            period: period.clone(),
            user_count: rows.len(),
            rows,
            countries: report.per_country,
            period_total: report.period_total,
        }
    }

    pub fn tier_status(ladder: &TierLadder, total: f64) -> TierStatus {
        tier_for(ladder, total)
    }
}
