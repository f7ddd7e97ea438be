use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use super::transaction::{Channel, ChannelFilter, PeriodKey, Transaction};

/// Per-user accumulation for one period and channel filter.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserAggregate {
    pub user_id: Uuid,
    pub total: f64,
    pub pos_total: f64,
    /// Country hit counts in the order each country was first seen for this
    /// user. The order is load-bearing: it breaks top-country ties.
    pub country_hits: Vec<(String, u32)>,
}

impl UserAggregate {
    fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            total: 0.0,
            pos_total: 0.0,
            country_hits: Vec::new(),
        }
    }

    fn record(&mut self, transaction: &Transaction) {
        self.total += transaction.amount;
        if transaction.channel == Channel::Pos {
            self.pos_total += transaction.amount;
        }
        match self
            .country_hits
            .iter_mut()
            .find(|(code, _)| code == &transaction.country)
        {
            Some((_, hits)) => *hits += 1,
            None => self.country_hits.push((transaction.country.clone(), 1)),
        }
    }

    /// Country with the most hits; ties keep the first-encountered country.
    pub fn top_country(&self) -> Option<&str> {
        let mut best: Option<(&str, u32)> = None;
        for (code, hits) in &self.country_hits {
            if best.map_or(true, |(_, top)| *hits > top) {
                best = Some((code, *hits));
            }
        }
        best.map(|(code, _)| code)
    }
}

/// Per-country accumulation across all users in the filtered period.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryAggregate {
    pub code: String,
    pub pos_total: f64,
    pub ecom_total: f64,
    pub total: f64,
}

impl CountryAggregate {
    fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            pos_total: 0.0,
            ecom_total: 0.0,
            total: 0.0,
        }
    }
}

/// Result of aggregating one period under one channel filter. Recomputed
/// fully on every query.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AggregateReport {
    /// One entry per user, in the order users were first encountered.
    pub per_user: Vec<UserAggregate>,
    /// One entry per country, sorted descending by total.
    pub per_country: Vec<CountryAggregate>,
    pub period_total: f64,
}

/// Groups transactions by user and by country for the selected period and
/// channel. Unknown periods and filters yield an empty report.
pub fn aggregate(
    transactions: &[Transaction],
    period: &PeriodKey,
    filter: ChannelFilter,
) -> AggregateReport {
    let mut per_user: Vec<UserAggregate> = Vec::new();
    let mut user_index: HashMap<Uuid, usize> = HashMap::new();
    let mut per_country: Vec<CountryAggregate> = Vec::new();
    let mut country_index: HashMap<String, usize> = HashMap::new();
    let mut period_total = 0.0;

    for transaction in transactions {
        if transaction.period_key() != *period || !filter.matches(transaction.channel) {
            continue;
        }

        let slot = *user_index.entry(transaction.user_id).or_insert_with(|| {
            per_user.push(UserAggregate::new(transaction.user_id));
            per_user.len() - 1
        });
        per_user[slot].record(transaction);

        let slot = *country_index
            .entry(transaction.country.clone())
            .or_insert_with(|| {
                per_country.push(CountryAggregate::new(&transaction.country));
                per_country.len() - 1
            });
        let bucket = &mut per_country[slot];
        bucket.total += transaction.amount;
        match transaction.channel {
            Channel::Pos => bucket.pos_total += transaction.amount,
            Channel::Ecom => bucket.ecom_total += transaction.amount,
        }

        period_total += transaction.amount;
    }

    per_country.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));

    AggregateReport {
        per_user,
        per_country,
        period_total,
    }
}
