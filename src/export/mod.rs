//! CSV documents handed to the external file-writer. Column order is a
//! contract with the consumer; never reorder the headers.

use chrono::NaiveDate;

use crate::planner::{Mandate, Portfolio};

pub const DEBTS_HEADER: &str = "id,kind,lender,apr(%),principal(bdt),minPayment(bdt),dueDay,status,mandateEnabled,mandateId,provider,monthlyLimit,mandateStatus";
pub const BILLS_HEADER: &str = "id,name,cycle,amount(bdt),dueDay,autopay,remindDaysBefore,status,mandateEnabled,mandateId,provider,monthlyLimit,mandateStatus";
pub const MANDATES_HEADER: &str = "type,name,mandateId,provider,monthlyLimit,status,lastUsed";

pub fn debts_csv(portfolio: &Portfolio) -> String {
    let mut out = String::from(DEBTS_HEADER);
    out.push('\n');
    for debt in &portfolio.debts {
        let mut fields = vec![
            debt.id.to_string(),
            debt.kind.label().to_string(),
            debt.lender.clone(),
            debt.apr.to_string(),
            debt.principal.to_string(),
            debt.min_payment.to_string(),
            debt.due_day.to_string(),
            debt.status().as_str().to_string(),
        ];
        fields.extend(mandate_fields(debt.mandate.as_ref()));
        out.push_str(&csv_line(&fields));
        out.push('\n');
    }
    out
}

/// Bills carry a due status derived against `reference` (today, for the UI).
pub fn bills_csv(portfolio: &Portfolio, reference: NaiveDate) -> String {
    let mut out = String::from(BILLS_HEADER);
    out.push('\n');
    for bill in &portfolio.bills {
        let mut fields = vec![
            bill.id.to_string(),
            bill.name.clone(),
            bill.cycle.label().to_string(),
            bill.amount.to_string(),
            bill.due_day.to_string(),
            bill.autopay.to_string(),
            bill.remind_days_before.to_string(),
            bill.status_on(reference).as_str().to_string(),
        ];
        fields.extend(mandate_fields(bill.mandate.as_ref()));
        out.push_str(&csv_line(&fields));
        out.push('\n');
    }
    out
}

/// One row per attached mandate, debts first, then bills.
pub fn mandates_csv(portfolio: &Portfolio) -> String {
    let mut out = String::from(MANDATES_HEADER);
    out.push('\n');
    let debts = portfolio
        .debts
        .iter()
        .filter_map(|debt| debt.mandate.as_ref().map(|m| ("debt", debt.lender.as_str(), m)));
    let bills = portfolio
        .bills
        .iter()
        .filter_map(|bill| bill.mandate.as_ref().map(|m| ("bill", bill.name.as_str(), m)));
    for (record_type, name, mandate) in debts.chain(bills) {
        let fields = vec![
            record_type.to_string(),
            name.to_string(),
            mandate.mandate_id.clone(),
            mandate.provider.clone(),
            mandate.monthly_limit.to_string(),
            mandate.status.as_str().to_string(),
            mandate
                .last_used
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        ];
        out.push_str(&csv_line(&fields));
        out.push('\n');
    }
    out
}

/// The five trailing mandate columns; all empty when no mandate is attached.
fn mandate_fields(mandate: Option<&Mandate>) -> [String; 5] {
    match mandate {
        Some(mandate) => [
            mandate.enabled.to_string(),
            mandate.mandate_id.clone(),
            mandate.provider.clone(),
            mandate.monthly_limit.to_string(),
            mandate.status.as_str().to_string(),
        ],
        None => Default::default(),
    }
}

fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

fn csv_line(fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| csv_field(field))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_with_commas_are_quoted_with_doubled_quotes() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("BRAC Bank, Ltd"), "\"BRAC Bank, Ltd\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
