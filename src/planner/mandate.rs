use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a recurring-debit authorization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MandateStatus {
    Active,
    Paused,
    Revoked,
}

impl MandateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MandateStatus::Active => "active",
            MandateStatus::Paused => "paused",
            MandateStatus::Revoked => "revoked",
        }
    }
}

/// Standing authorization letting a provider debit the account automatically
/// up to a monthly limit.
///
/// `enabled` is true exactly when `status` is `Active`; every mutation goes
/// through the setters below to keep the pair coupled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mandate {
    pub enabled: bool,
    pub mandate_id: String,
    pub provider: String,
    pub monthly_limit: f64,
    pub status: MandateStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<NaiveDate>,
}

impl Mandate {
    pub fn new(provider: impl Into<String>, monthly_limit: f64) -> Self {
        Self {
            enabled: true,
            mandate_id: generate_mandate_id(),
            provider: provider.into(),
            monthly_limit: monthly_limit.max(0.0),
            status: MandateStatus::Active,
            last_used: None,
        }
    }

    pub fn set_status(&mut self, status: MandateStatus) {
        self.status = status;
        self.enabled = status == MandateStatus::Active;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.status = if enabled {
            MandateStatus::Active
        } else {
            MandateStatus::Paused
        };
    }

    pub fn apply(&mut self, patch: &MandatePatch) {
        if let Some(mandate_id) = &patch.mandate_id {
            self.mandate_id = mandate_id.clone();
        }
        if let Some(provider) = &patch.provider {
            self.provider = provider.clone();
        }
        if let Some(limit) = patch.monthly_limit {
            self.monthly_limit = limit.max(0.0);
        }
        if let Some(status) = patch.status {
            self.set_status(status);
        } else if let Some(enabled) = patch.enabled {
            self.set_enabled(enabled);
        }
    }
}

/// Partial edit of a mandate. An explicit `status` wins over `enabled`; the
/// other field is derived either way so the coupling holds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MandatePatch {
    pub mandate_id: Option<String>,
    pub provider: Option<String>,
    pub monthly_limit: Option<f64>,
    pub status: Option<MandateStatus>,
    pub enabled: Option<bool>,
}

pub fn generate_mandate_id() -> String {
    format!("EMD-{}", Uuid::new_v4().simple())
}
