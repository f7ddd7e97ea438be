use std::{env, path::PathBuf, process};

use chrono::{NaiveDate, TimeZone, Utc};

use taka_core::{
    config::{Config, ConfigManager},
    currency,
    export,
    init,
    leaderboard::{
        badge_rules_for, Channel, ChannelFilter, PeriodKey, Segment, SpendBook, Transaction,
        User, DEFAULT_TIER_LADDER,
    },
    planner::{Bill, BillCycle, Debt, DebtKind, Portfolio},
    services::{LeaderboardService, MandateService, PlannerService},
    utils::persistence,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });

    let config = load_config();

    match command.as_str() {
        "sample-spend" => {
            println!("{}", serde_json::to_string_pretty(&sample_spend_book())?);
        }
        "sample-portfolio" => {
            println!(
                "{}",
                serde_json::to_string_pretty(&sample_portfolio(&config))?
            );
        }
        "leaderboard" => {
            let path = next_path(&mut args)?;
            let period = PeriodKey::new(next_arg(&mut args, "period")?);
            let filter = args
                .next()
                .map(|token| ChannelFilter::parse(&token))
                .unwrap_or(ChannelFilter::All);

            let book = persistence::load_spend_book(&path)?;
            let rules = badge_rules_for(&config.high_value_country);
            let report =
                LeaderboardService::build(&book, &period, filter, &DEFAULT_TIER_LADDER, &rules);

            println!(
                "Leaderboard {} — {} users, {}",
                report.period,
                report.user_count,
                currency::format_amount(&config.currency, report.period_total)
            );
            for row in &report.rows {
                let badges = if row.badges.is_empty() {
                    String::new()
                } else {
                    format!("  [{}]", row.badges.join(", "))
                };
                println!(
                    "#{:<3} {:<16} {:>14}  {:<20} POS {:>3.0}%  top {}{}",
                    row.rank,
                    row.alias,
                    currency::format_amount(&config.currency, row.total),
                    row.tier,
                    row.pos_fraction * 100.0,
                    row.top_country.as_deref().unwrap_or("-"),
                    badges
                );
            }
        }
        "plan" => {
            let path = next_path(&mut args)?;
            let extra: f64 = next_arg(&mut args, "extra-budget")?.parse()?;
            let months: usize = match args.next() {
                Some(raw) => raw.parse()?,
                None => config.horizon_months,
            };

            let portfolio = persistence::load_portfolio(&path)?;
            let points = PlannerService::project_payoff(&portfolio, extra, months);
            if points.is_empty() {
                println!("No debts to project.");
            }
            for point in &points {
                println!(
                    "{:<4} {}",
                    point.label,
                    currency::format_amount(&config.currency, point.total_balance)
                );
            }
        }
        "export-debts" => {
            let path = next_path(&mut args)?;
            let portfolio = persistence::load_portfolio(&path)?;
            print!("{}", export::debts_csv(&portfolio));
        }
        "export-bills" => {
            let path = next_path(&mut args)?;
            let reference = match args.next() {
                Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")?,
                None => Utc::now().date_naive(),
            };
            let portfolio = persistence::load_portfolio(&path)?;
            print!("{}", export::bills_csv(&portfolio, reference));
        }
        "export-mandates" => {
            let path = next_path(&mut args)?;
            let portfolio = persistence::load_portfolio(&path)?;
            print!("{}", export::mandates_csv(&portfolio));
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn load_config() -> Config {
    match ConfigManager::new().and_then(|manager| manager.load()) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("falling back to default config: {err}");
            Config::default()
        }
    }
}

fn next_arg(
    args: &mut impl Iterator<Item = String>,
    name: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    args.next().ok_or_else(|| {
        print_usage();
        format!("missing <{name}> argument").into()
    })
}

fn next_path(
    args: &mut impl Iterator<Item = String>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    Ok(PathBuf::from(next_arg(args, "file")?))
}

fn sample_spend_book() -> SpendBook {
    let mut book = SpendBook::new();
    let rafiq = book.add_user(User::new("rafiq_dhk", Segment::Premium));
    let anika = book.add_user(User::new("anika_ctg", Segment::Standard));
    let tanvir = book.add_user(User::new("tanvir_syl", Segment::Student));

    let stamp = |day, hour| Utc.with_ymd_and_hms(2026, 8, day, hour, 0, 0).unwrap();
    book.add_transaction(Transaction::new(rafiq, "US", Channel::Pos, 850.0, stamp(2, 10)));
    book.add_transaction(Transaction::new(rafiq, "SG", Channel::Pos, 620.0, stamp(9, 14)));
    book.add_transaction(Transaction::new(rafiq, "US", Channel::Ecom, 940.0, stamp(17, 20)));
    book.add_transaction(Transaction::new(anika, "AE", Channel::Ecom, 410.0, stamp(4, 9)));
    book.add_transaction(Transaction::new(anika, "MY", Channel::Pos, 380.0, stamp(12, 16)));
    book.add_transaction(Transaction::new(anika, "AE", Channel::Pos, 530.0, stamp(23, 11)));
    book.add_transaction(Transaction::new(tanvir, "IN", Channel::Ecom, 150.0, stamp(6, 13)));
    book.add_transaction(Transaction::new(tanvir, "IN", Channel::Pos, 95.0, stamp(19, 18)));
    book
}

fn sample_portfolio(config: &Config) -> Portfolio {
    let mut portfolio = Portfolio::new();
    portfolio.add_debt(Debt::new(
        DebtKind::CreditCard,
        "City Bank Amex",
        24.0,
        48000.0,
        2400.0,
        7,
    ));
    portfolio.add_debt(Debt::new(
        DebtKind::PersonalLoan,
        "BRAC Bank",
        15.5,
        120000.0,
        5500.0,
        15,
    ));
    portfolio.add_debt(Debt::new(DebtKind::Bnpl, "Shohoj Pay", 0.0, 9000.0, 1500.0, 25));

    let electricity = portfolio.add_bill(Bill::new(
        "DESCO Electricity",
        1800.0,
        12,
        BillCycle::Monthly,
        true,
        5,
    ));
    portfolio.add_bill(Bill::new("Internet", 1050.0, 20, BillCycle::Monthly, false, 3));

    MandateService::toggle(&portfolio, electricity, config)
}

fn print_usage() {
    eprintln!(
        "Usage: taka_core_cli <command>\n\
         Commands:\n  \
         sample-spend\n  \
         sample-portfolio\n  \
         leaderboard <book.json> <period> [all|POS|E-COM]\n  \
         plan <portfolio.json> <extra-budget> [months]\n  \
         export-debts <portfolio.json>\n  \
         export-bills <portfolio.json> [YYYY-MM-DD]\n  \
         export-mandates <portfolio.json>"
    );
}
