use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::Response;
use chrono::{Datelike, Months, NaiveDate};
use rust_decimal_macros::dec;
use serde_json::Value;

use crate::calculator::config::CalculatorConfig;
use crate::calculator::domain::{
    Employment, EmploymentStatus, FamilyStatus, Gender, LoanRequest, Position, ScoringInput,
};
use crate::calculator::{
    AmortizationEngine, CreditFinalizer, EligibilityEngine, LoanCalculator, OfferGenerator,
    RateEngine,
};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
}

pub(super) fn born_years_before(reference: NaiveDate, years: u32) -> NaiveDate {
    reference
        .checked_sub_months(Months::new(12 * years))
        .expect("valid birth date")
}

pub(super) fn born_years_ago(years: u32) -> NaiveDate {
    born_years_before(today(), years)
}

/// Born the day after the anniversary, so still `years - 1` on `today()`.
pub(super) fn turning_tomorrow(years: u32) -> NaiveDate {
    let birthday = born_years_ago(years);
    birthday.succ_opt().expect("valid date")
}

pub(super) fn config() -> Arc<CalculatorConfig> {
    Arc::new(CalculatorConfig::default())
}

pub(super) fn rate_engine() -> RateEngine {
    RateEngine::new(config())
}

pub(super) fn eligibility_engine() -> EligibilityEngine {
    EligibilityEngine::new(config())
}

pub(super) fn amortization_engine() -> AmortizationEngine {
    AmortizationEngine::new(config())
}

pub(super) fn offer_generator() -> OfferGenerator {
    OfferGenerator::new(rate_engine(), amortization_engine())
}

pub(super) fn credit_finalizer() -> CreditFinalizer {
    CreditFinalizer::new(eligibility_engine(), rate_engine(), amortization_engine())
}

pub(super) fn calculator() -> LoanCalculator {
    LoanCalculator::default()
}

pub(super) fn loan_request() -> LoanRequest {
    LoanRequest {
        amount: dec!(100000),
        term: 12,
        first_name: "Anna".to_string(),
        last_name: "Petrova".to_string(),
        middle_name: None,
        email: "anna.petrova@mail.com".to_string(),
        birthdate: born_years_ago(35),
        passport_series: "1234".to_string(),
        passport_number: "123456".to_string(),
    }
}

pub(super) fn employment() -> Employment {
    Employment {
        employment_status: EmploymentStatus::Employed,
        employer_inn: "1234567890".to_string(),
        salary: dec!(50000),
        position: Position::Worker,
        work_experience_total: 60,
        work_experience_current: 12,
    }
}

/// Single employed woman aged 35, no insurance, not a salary client: rate 12.
pub(super) fn scoring_input() -> ScoringInput {
    ScoringInput {
        amount: dec!(200000),
        term: 24,
        first_name: "Anna".to_string(),
        last_name: "Petrova".to_string(),
        middle_name: Some("Ivanovna".to_string()),
        gender: Gender::Female,
        birthdate: born_years_ago(35),
        passport_series: "1234".to_string(),
        passport_number: "123456".to_string(),
        passport_issue_date: NaiveDate::from_ymd_opt(2015, 4, 2).expect("valid date"),
        passport_issue_branch: "Central district office".to_string(),
        family_status: FamilyStatus::Single,
        dependent_amount: 0,
        employment: employment(),
        account_number: "40817810099910004312".to_string(),
        is_insurance_enabled: false,
        is_salary_client: false,
    }
}

/// Shift the applicant's birthdate so the fixture is valid against a live clock.
pub(super) fn aged_relative_to(mut input: ScoringInput, reference: NaiveDate) -> ScoringInput {
    let years = (today().year() - input.birthdate.year()) as u32;
    input.birthdate = born_years_before(reference, years);
    input
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
