use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Purchase channel recorded on every spend transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Channel {
    #[serde(rename = "POS")]
    Pos,
    #[serde(rename = "E-COM")]
    Ecom,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Pos => "POS",
            Channel::Ecom => "E-COM",
        }
    }
}

/// Channel selection applied when aggregating a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelFilter {
    #[default]
    All,
    Only(Channel),
}

impl ChannelFilter {
    pub fn matches(&self, channel: Channel) -> bool {
        match self {
            ChannelFilter::All => true,
            ChannelFilter::Only(wanted) => *wanted == channel,
        }
    }

    /// Parses the UI filter token. Unrecognized tokens degrade to `All`.
    pub fn parse(token: &str) -> ChannelFilter {
        if token.eq_ignore_ascii_case("pos") {
            ChannelFilter::Only(Channel::Pos)
        } else if token.eq_ignore_ascii_case("e-com") || token.eq_ignore_ascii_case("ecom") {
            ChannelFilter::Only(Channel::Ecom)
        } else {
            ChannelFilter::All
        }
    }
}

/// Canonical year-month key bucketing transactions into an aggregation window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PeriodKey(pub String);

impl PeriodKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn from_timestamp(timestamp: DateTime<Utc>) -> Self {
        Self(format!("{:04}-{:02}", timestamp.year(), timestamp.month()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Customer segment carried on the user record for display purposes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Standard,
    Premium,
    Student,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub display_alias: String,
    pub segment: Segment,
}

impl User {
    pub fn new(display_alias: impl Into<String>, segment: Segment) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_alias: display_alias.into(),
            segment,
        }
    }
}

/// A single cross-border spend record. Immutable once generated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    /// ISO 3166-1 alpha-2 country where the spend happened.
    pub country: String,
    pub channel: Channel,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        user_id: Uuid,
        country: impl Into<String>,
        channel: Channel,
        amount: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            country: country.into(),
            channel,
            amount,
            timestamp,
        }
    }

    pub fn period_key(&self) -> PeriodKey {
        PeriodKey::from_timestamp(self.timestamp)
    }
}

/// On-file dataset the demo loads: users plus their raw spend records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SpendBook {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl SpendBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&mut self, user: User) -> Uuid {
        let id = user.id;
        self.users.push(user);
        id
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        id
    }

    pub fn alias_of(&self, id: Uuid) -> Option<&str> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .map(|user| user.display_alias.as_str())
    }
}
