//! Spend leaderboard domain: raw records, period aggregation, and ranking.

pub mod aggregate;
pub mod ranking;
pub mod transaction;

pub use aggregate::{aggregate, AggregateReport, CountryAggregate, UserAggregate};
pub use ranking::{
    badge_rules_for, rank, tier_for, AggregateRow, BadgeRule, TierDefinition, TierLadder,
    TierStatus, DEFAULT_BADGE_RULES, DEFAULT_TIER_LADDER,
};
pub use transaction::{Channel, ChannelFilter, PeriodKey, Segment, SpendBook, Transaction, User};
