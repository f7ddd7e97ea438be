use chrono::NaiveDate;
use taka_core::config::Config;
use taka_core::export::{
    bills_csv, debts_csv, mandates_csv, BILLS_HEADER, DEBTS_HEADER, MANDATES_HEADER,
};
use taka_core::planner::{Bill, BillCycle, Debt, DebtKind, Portfolio};
use taka_core::services::MandateService;

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 10).unwrap()
}

#[test]
fn headers_match_the_consumer_contract() {
    assert_eq!(
        DEBTS_HEADER,
        "id,kind,lender,apr(%),principal(bdt),minPayment(bdt),dueDay,status,mandateEnabled,mandateId,provider,monthlyLimit,mandateStatus"
    );
    assert_eq!(
        BILLS_HEADER,
        "id,name,cycle,amount(bdt),dueDay,autopay,remindDaysBefore,status,mandateEnabled,mandateId,provider,monthlyLimit,mandateStatus"
    );
    assert_eq!(
        MANDATES_HEADER,
        "type,name,mandateId,provider,monthlyLimit,status,lastUsed"
    );

    let portfolio = Portfolio::new();
    assert!(debts_csv(&portfolio).starts_with(DEBTS_HEADER));
    assert!(bills_csv(&portfolio, reference()).starts_with(BILLS_HEADER));
    assert!(mandates_csv(&portfolio).starts_with(MANDATES_HEADER));
}

#[test]
fn absent_mandate_serializes_as_empty_fields() {
    let mut portfolio = Portfolio::new();
    portfolio.add_debt(Debt::new(DebtKind::Bnpl, "Shohoj Pay", 0.0, 9000.0, 1500.0, 25));

    let csv = debts_csv(&portfolio);
    let row = csv.lines().nth(1).unwrap();
    assert!(row.ends_with("25,active,,,,,"), "unexpected row: {row}");
    assert_eq!(row.split(',').count(), 13);
}

#[test]
fn comma_in_lender_is_quoted_with_doubled_quotes() {
    let mut portfolio = Portfolio::new();
    portfolio.add_debt(Debt::new(
        DebtKind::PersonalLoan,
        "BRAC Bank, Ltd",
        15.5,
        120000.0,
        5500.0,
        15,
    ));

    let csv = debts_csv(&portfolio);
    assert!(csv.contains("\"BRAC Bank, Ltd\""));
    let row = csv.lines().nth(1).unwrap();
    // Quoting keeps the logical column count intact for the consumer.
    assert!(row.contains(",personal_loan,"));
}

#[test]
fn cleared_debt_reports_cleared_status() {
    let mut portfolio = Portfolio::new();
    portfolio.add_debt(Debt::new(DebtKind::CreditCard, "City Bank", 24.0, 0.0, 0.0, 7));
    let csv = debts_csv(&portfolio);
    assert!(csv.lines().nth(1).unwrap().contains(",cleared,"));
}

#[test]
fn bill_status_tracks_the_reference_date() {
    let mut portfolio = Portfolio::new();
    portfolio.add_bill(Bill::new("Internet", 1050.0, 12, BillCycle::Monthly, false, 3));

    let near = bills_csv(&portfolio, reference());
    assert!(near.lines().nth(1).unwrap().contains(",due-soon,"));

    let far = bills_csv(&portfolio, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
    assert!(far.lines().nth(1).unwrap().contains(",scheduled,"));
}

#[test]
fn mandates_csv_lists_debts_before_bills() {
    let mut portfolio = Portfolio::new();
    let debt_id = portfolio.add_debt(Debt::new(
        DebtKind::CreditCard,
        "City Bank",
        24.0,
        48000.0,
        2400.0,
        7,
    ));
    let bill_id = portfolio.add_bill(Bill::new(
        "Electricity",
        1800.0,
        12,
        BillCycle::Monthly,
        true,
        5,
    ));

    let config = Config::default();
    let portfolio = MandateService::toggle(&portfolio, debt_id, &config);
    let portfolio = MandateService::toggle(&portfolio, bill_id, &config);

    let csv = mandates_csv(&portfolio);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("debt,City Bank,EMD-"));
    assert!(lines[2].starts_with("bill,Electricity,EMD-"));
    // No last_used yet: the trailing column is empty.
    assert!(lines[1].ends_with(",active,"));
}

#[test]
fn records_without_mandates_are_skipped_in_mandates_csv() {
    let mut portfolio = Portfolio::new();
    portfolio.add_bill(Bill::new("Water", 400.0, 20, BillCycle::Monthly, false, 7));
    let csv = mandates_csv(&portfolio);
    assert_eq!(csv.lines().count(), 1);
}
