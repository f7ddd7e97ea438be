use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::mandate::Mandate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DebtKind {
    CreditCard,
    PersonalLoan,
    Bnpl,
}

impl DebtKind {
    pub fn label(&self) -> &'static str {
        match self {
            DebtKind::CreditCard => "credit_card",
            DebtKind::PersonalLoan => "personal_loan",
            DebtKind::Bnpl => "bnpl",
        }
    }
}

/// Outstanding liability tracked by the planner screen. Projection never
/// mutates the stored record; it works on its own copies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Debt {
    pub id: Uuid,
    pub kind: DebtKind,
    pub lender: String,
    /// Annual percentage rate, e.g. 15.5 for 15.5%.
    pub apr: f64,
    pub principal: f64,
    pub min_payment: f64,
    /// Day of month the installment falls due.
    pub due_day: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandate: Option<Mandate>,
}

impl Debt {
    pub fn new(
        kind: DebtKind,
        lender: impl Into<String>,
        apr: f64,
        principal: f64,
        min_payment: f64,
        due_day: u8,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            lender: lender.into(),
            apr,
            principal,
            min_payment,
            due_day,
            mandate: None,
        }
    }

    pub fn status(&self) -> DebtStatus {
        if self.principal > 0.0 {
            DebtStatus::Active
        } else {
            DebtStatus::Cleared
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DebtStatus {
    Active,
    Cleared,
}

impl DebtStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebtStatus::Active => "active",
            DebtStatus::Cleared => "cleared",
        }
    }
}
