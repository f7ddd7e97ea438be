use std::cmp::Ordering;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::EngineError;

use super::aggregate::UserAggregate;
use super::transaction::User;

/// One rung of the reward ladder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TierDefinition {
    pub name: String,
    pub threshold: f64,
}

impl TierDefinition {
    pub fn new(name: impl Into<String>, threshold: f64) -> Self {
        Self {
            name: name.into(),
            threshold,
        }
    }
}

/// Ordered reward ladder. Thresholds must strictly increase; the head rung is
/// the floor every total falls back to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TierLadder {
    tiers: Vec<TierDefinition>,
}

impl TierLadder {
    pub fn new(tiers: Vec<TierDefinition>) -> Result<Self, EngineError> {
        if tiers.is_empty() {
            return Err(EngineError::InvalidLadder(
                "ladder needs at least one tier".into(),
            ));
        }
        for pair in tiers.windows(2) {
            if pair[1].threshold <= pair[0].threshold {
                return Err(EngineError::InvalidLadder(format!(
                    "thresholds must strictly increase ({} after {})",
                    pair[1].threshold, pair[0].threshold
                )));
            }
        }
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[TierDefinition] {
        &self.tiers
    }

    pub fn floor(&self) -> &TierDefinition {
        &self.tiers[0]
    }
}

pub static DEFAULT_TIER_LADDER: Lazy<TierLadder> = Lazy::new(|| {
    TierLadder::new(vec![
        TierDefinition::new("Bronze Explorer", 100.0),
        TierDefinition::new("Silver Voyager", 500.0),
        TierDefinition::new("Gold Jetsetter", 1200.0),
        TierDefinition::new("Platinum Traveller", 2000.0),
    ])
    .expect("default ladder thresholds increase")
});

/// Where a total sits on the ladder and what it takes to climb.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TierStatus {
    pub current: String,
    pub next: Option<TierDefinition>,
    pub remaining: f64,
}

/// Resolves the tier for a cumulative total. The current tier is the last
/// rung at or below the total, never below the floor rung; `next` is the
/// first rung above the total, which for sub-floor totals is the floor
/// threshold itself.
pub fn tier_for(ladder: &TierLadder, total: f64) -> TierStatus {
    let mut current: Option<&TierDefinition> = None;
    let mut next: Option<&TierDefinition> = None;
    for tier in ladder.tiers() {
        if tier.threshold <= total {
            current = Some(tier);
        } else {
            next = Some(tier);
            break;
        }
    }
    let current = current.unwrap_or_else(|| ladder.floor());
    let remaining = next.map_or(0.0, |tier| (tier.threshold - total).max(0.0));
    TierStatus {
        current: current.name.clone(),
        next: next.cloned(),
        remaining,
    }
}

/// Badge predicates kept as a data table so a new badge is an added row,
/// not new control flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BadgeRule {
    TotalAbove { threshold: f64, label: String },
    PosShareAbove { threshold: f64, label: String },
    TopCountryIs { code: String, label: String },
}

impl BadgeRule {
    pub fn label(&self) -> &str {
        match self {
            BadgeRule::TotalAbove { label, .. } => label,
            BadgeRule::PosShareAbove { label, .. } => label,
            BadgeRule::TopCountryIs { label, .. } => label,
        }
    }

    fn applies(&self, total: f64, pos_fraction: f64, top_country: Option<&str>) -> bool {
        match self {
            BadgeRule::TotalAbove { threshold, .. } => total > *threshold,
            BadgeRule::PosShareAbove { threshold, .. } => pos_fraction > *threshold,
            BadgeRule::TopCountryIs { code, .. } => top_country == Some(code.as_str()),
        }
    }
}

pub static DEFAULT_BADGE_RULES: Lazy<Vec<BadgeRule>> = Lazy::new(|| {
    vec![
        BadgeRule::TotalAbove {
            threshold: 1000.0,
            label: "High Roller".into(),
        },
        BadgeRule::PosShareAbove {
            threshold: 0.6,
            label: "POS Pro".into(),
        },
        BadgeRule::TopCountryIs {
            code: "US".into(),
            label: "Stateside Shopper".into(),
        },
    ]
});

/// Default badge table with the country badge pointed at `code`.
pub fn badge_rules_for(code: &str) -> Vec<BadgeRule> {
    vec![
        BadgeRule::TotalAbove {
            threshold: 1000.0,
            label: "High Roller".into(),
        },
        BadgeRule::PosShareAbove {
            threshold: 0.6,
            label: "POS Pro".into(),
        },
        BadgeRule::TopCountryIs {
            code: code.into(),
            label: format!("{code} Shopper"),
        },
    ]
}

/// Leaderboard row as the UI consumes it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AggregateRow {
    pub rank: u32,
    pub user_id: Uuid,
    pub alias: String,
    pub total: f64,
    pub top_country: Option<String>,
    pub pos_fraction: f64,
    pub badges: Vec<String>,
    pub tier: String,
}

/// Ranks user aggregates descending by total. The sort is stable, so equal
/// totals keep the aggregator's first-encounter order.
pub fn rank(
    per_user: &[UserAggregate],
    users: &[User],
    ladder: &TierLadder,
    rules: &[BadgeRule],
) -> Vec<AggregateRow> {
    let mut ordered: Vec<&UserAggregate> = per_user.iter().collect();
    ordered.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));

    ordered
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            let pos_fraction = if entry.total > 0.0 {
                entry.pos_total / entry.total
            } else {
                0.0
            };
            let top_country = entry.top_country().map(str::to_string);
            let badges = rules
                .iter()
                .filter(|rule| rule.applies(entry.total, pos_fraction, top_country.as_deref()))
                .map(|rule| rule.label().to_string())
                .collect();
            let alias = users
                .iter()
                .find(|user| user.id == entry.user_id)
                .map(|user| user.display_alias.clone())
                .unwrap_or_else(|| entry.user_id.to_string());
            AggregateRow {
                rank: position as u32 + 1,
                user_id: entry.user_id,
                alias,
                total: entry.total,
                top_country,
                pos_fraction,
                badges,
                tier: tier_for(ladder, entry.total).current,
            }
        })
        .collect()
}
