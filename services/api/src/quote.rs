use chrono::{Local, NaiveDate};
use clap::Args;
use credit_calculator::calculator::{Credit, LoanCalculator, LoanOffer, ScoringInput};
use credit_calculator::config::AppConfig;
use credit_calculator::error::AppError;
use rust_decimal::Decimal;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct OffersArgs {
    /// Requested loan amount
    #[arg(long)]
    pub(crate) amount: Decimal,
    /// Loan term in months
    #[arg(long)]
    pub(crate) term: u32,
}

#[derive(Args, Debug)]
pub(crate) struct CreditArgs {
    /// JSON file holding the applicant's scoring data
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Issue date for the credit (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the full payment schedule after the summary.
    #[arg(long)]
    pub(crate) schedule: bool,
}

pub(crate) fn run_offers(args: OffersArgs) -> Result<(), AppError> {
    let calculator = load_calculator()?;
    let offers = calculator.quote_offers(args.amount, args.term)?;
    print!("{}", render_offers(&offers));
    Ok(())
}

pub(crate) fn run_credit(args: CreditArgs) -> Result<(), AppError> {
    let CreditArgs {
        input,
        today,
        schedule,
    } = args;

    let raw = fs::read_to_string(input)?;
    let applicant: ScoringInput = serde_json::from_str(&raw)?;
    let issue_date = today.unwrap_or_else(|| Local::now().date_naive());

    let calculator = load_calculator()?;
    let credit = calculator.calculate_credit_on(&applicant, issue_date)?;
    print!("{}", render_credit(&credit, issue_date, schedule));
    Ok(())
}

fn load_calculator() -> Result<LoanCalculator, AppError> {
    let config = AppConfig::load()?;
    Ok(LoanCalculator::new(config.calculator))
}

fn flag(enabled: bool) -> &'static str {
    if enabled {
        "yes"
    } else {
        "no"
    }
}

pub(crate) fn render_offers(offers: &[LoanOffer]) -> String {
    let mut out = String::new();
    let Some(first) = offers.first() else {
        out.push_str("No offers available\n");
        return out;
    };

    let _ = writeln!(
        out,
        "Loan offers for {} over {} months",
        first.requested_amount, first.term
    );
    for offer in offers {
        let _ = writeln!(
            out,
            "- insurance {}, salary client {}: rate {}%, financed {}, monthly payment {}",
            flag(offer.is_insurance_enabled),
            flag(offer.is_salary_client),
            offer.rate,
            offer.total_amount,
            offer.monthly_payment
        );
    }
    out
}

pub(crate) fn render_credit(credit: &Credit, issue_date: NaiveDate, schedule: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Credit issued {issue_date}");
    let _ = writeln!(
        out,
        "Amount {} over {} months at {}%",
        credit.amount, credit.term, credit.rate
    );
    let _ = writeln!(out, "Monthly payment {}", credit.monthly_payment);
    let _ = writeln!(out, "Total cost of credit {}", credit.psk);
    let _ = writeln!(
        out,
        "Insurance {}, salary client {}",
        flag(credit.is_insurance_enabled),
        flag(credit.is_salary_client)
    );

    if schedule {
        let _ = writeln!(out, "\nPayment schedule");
        for entry in &credit.payment_schedule {
            let _ = writeln!(
                out,
                "{:>3} {} total {} interest {} principal {} remaining {}",
                entry.number,
                entry.date,
                entry.total_payment,
                entry.interest_payment,
                entry.debt_payment,
                entry.remaining_debt
            );
        }
    }
    out
}
