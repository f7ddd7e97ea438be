use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::mandate::Mandate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BillCycle {
    Monthly,
    Quarterly,
    Yearly,
}

impl BillCycle {
    pub fn label(&self) -> &'static str {
        match self {
            BillCycle::Monthly => "monthly",
            BillCycle::Quarterly => "quarterly",
            BillCycle::Yearly => "yearly",
        }
    }
}

/// Recurring obligation shown on the bill manager screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bill {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub due_day: u8,
    pub cycle: BillCycle,
    pub autopay: bool,
    pub remind_days_before: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandate: Option<Mandate>,
}

impl Bill {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        due_day: u8,
        cycle: BillCycle,
        autopay: bool,
        remind_days_before: u8,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            due_day,
            cycle,
            autopay,
            remind_days_before,
            mandate: None,
        }
    }

    /// Days until the next occurrence of `due_day`, rolling into the next
    /// month once this month's due day has passed.
    pub fn days_until_due(&self, reference: NaiveDate) -> i64 {
        (next_due_date(self.due_day, reference) - reference).num_days()
    }

    pub fn status_on(&self, reference: NaiveDate) -> BillStatus {
        if self.days_until_due(reference) <= i64::from(self.remind_days_before) {
            BillStatus::DueSoon
        } else {
            BillStatus::Scheduled
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BillStatus {
    DueSoon,
    Scheduled,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::DueSoon => "due-soon",
            BillStatus::Scheduled => "scheduled",
        }
    }
}

fn next_due_date(due_day: u8, reference: NaiveDate) -> NaiveDate {
    // Due days past 28 are clamped so every month has the date.
    let day = u32::from(due_day).clamp(1, 28);
    match NaiveDate::from_ymd_opt(reference.year(), reference.month(), day) {
        Some(date) if date >= reference => date,
        _ => {
            let (year, month) = if reference.month() == 12 {
                (reference.year() + 1, 1)
            } else {
                (reference.year(), reference.month() + 1)
            };
            NaiveDate::from_ymd_opt(year, month, day).unwrap_or(reference)
        }
    }
}
