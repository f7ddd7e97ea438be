use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::bill::Bill;
use super::debt::Debt;
use super::mandate::{Mandate, MandatePatch, MandateStatus};

/// Snapshot container for the planner screen: the debts and bills one caller
/// owns. Mandate operations return a fresh snapshot so the caller replaces
/// the whole value atomically; operations targeting an unknown id return a
/// snapshot equal to the input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Portfolio {
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub bills: Vec<Bill>,
    pub updated_at: DateTime<Utc>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self {
            debts: Vec::new(),
            bills: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    pub fn add_debt(&mut self, debt: Debt) -> Uuid {
        let id = debt.id;
        self.debts.push(debt);
        self.touch();
        id
    }

    pub fn add_bill(&mut self, bill: Bill) -> Uuid {
        let id = bill.id;
        self.bills.push(bill);
        self.touch();
        id
    }

    pub fn debt(&self, id: Uuid) -> Option<&Debt> {
        self.debts.iter().find(|debt| debt.id == id)
    }

    pub fn bill(&self, id: Uuid) -> Option<&Bill> {
        self.bills.iter().find(|bill| bill.id == id)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Flips the mandate on the debt or bill with `id`: an enabled mandate is
    /// paused; anything else (absent, paused, or revoked) ends up active,
    /// creating the mandate with the given defaults when missing.
    pub fn with_mandate_toggled(
        &self,
        id: Uuid,
        default_provider: &str,
        default_limit: f64,
    ) -> Portfolio {
        let mut next = self.clone();
        let mut changed = false;
        if let Some(slot) = next.mandate_slot(id) {
            match slot {
                Some(mandate) if mandate.enabled => mandate.set_status(MandateStatus::Paused),
                Some(mandate) => mandate.set_status(MandateStatus::Active),
                None => *slot = Some(Mandate::new(default_provider, default_limit)),
            }
            changed = true;
        }
        if changed {
            next.touch();
        }
        next
    }

    /// Applies a field patch to the mandate on the record with `id`. Records
    /// without a mandate, like unknown ids, are left untouched.
    pub fn with_mandate_edited(&self, id: Uuid, patch: &MandatePatch) -> Portfolio {
        let mut next = self.clone();
        let mut changed = false;
        if let Some(Some(mandate)) = next.mandate_slot(id) {
            mandate.apply(patch);
            changed = true;
        }
        if changed {
            next.touch();
        }
        next
    }

    /// Revokes the mandate on the record with `id`. Revoking an already
    /// revoked mandate changes nothing.
    pub fn with_mandate_revoked(&self, id: Uuid) -> Portfolio {
        let mut next = self.clone();
        let mut changed = false;
        if let Some(Some(mandate)) = next.mandate_slot(id) {
            if mandate.status != MandateStatus::Revoked {
                mandate.set_status(MandateStatus::Revoked);
                changed = true;
            }
        }
        if changed {
            next.touch();
        }
        next
    }

    fn mandate_slot(&mut self, id: Uuid) -> Option<&mut Option<Mandate>> {
        if let Some(debt) = self.debts.iter_mut().find(|debt| debt.id == id) {
            return Some(&mut debt.mandate);
        }
        if let Some(bill) = self.bills.iter_mut().find(|bill| bill.id == id) {
            return Some(&mut bill.mandate);
        }
        None
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new()
    }
}
