use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::common::*;
use crate::calculator::domain::EmploymentStatus;
use crate::calculator::{CalculationError, DenialReason, InvalidInput};

#[test]
fn approved_credit_carries_scored_terms() {
    let credit = credit_finalizer()
        .finalize(&scoring_input(), today())
        .expect("credit approved");

    assert_eq!(credit.amount, dec!(200000));
    assert_eq!(credit.term, 24);
    assert_eq!(credit.rate, dec!(12));
    assert_eq!(credit.monthly_payment, dec!(9414.69));
    assert_eq!(credit.psk, dec!(225952.67));
    assert!(!credit.is_insurance_enabled);
    assert!(!credit.is_salary_client);
}

#[test]
fn approved_credit_schedule_is_complete() {
    let credit = credit_finalizer()
        .finalize(&scoring_input(), today())
        .expect("credit approved");

    let schedule = &credit.payment_schedule;
    assert_eq!(schedule.len(), 24);
    assert_eq!(schedule[0].interest_payment, dec!(2000.00));
    assert_eq!(schedule[0].debt_payment, dec!(7414.69));
    assert_eq!(schedule[0].remaining_debt, dec!(192585.31));
    assert_eq!(
        schedule[0].date,
        NaiveDate::from_ymd_opt(2025, 7, 15).expect("valid date")
    );
    assert_eq!(
        schedule[23].date,
        NaiveDate::from_ymd_opt(2027, 6, 15).expect("valid date")
    );
    assert_eq!(schedule[23].total_payment, dec!(9414.83));
    assert_eq!(schedule[23].remaining_debt, Decimal::ZERO);
    assert_eq!(credit.scheduled_principal(), credit.amount);
    assert!(schedule
        .iter()
        .enumerate()
        .all(|(index, entry)| entry.number as usize == index + 1));
}

#[test]
fn insured_salary_client_finances_premium_at_discounted_rate() {
    let mut input = scoring_input();
    input.is_insurance_enabled = true;
    input.is_salary_client = true;

    let credit = credit_finalizer()
        .finalize(&input, today())
        .expect("credit approved");

    assert_eq!(credit.amount, dec!(220000.00));
    assert_eq!(credit.rate, dec!(7.9));
    assert!(credit.is_insurance_enabled);
    assert!(credit.is_salary_client);
    assert_eq!(credit.scheduled_principal(), dec!(220000.00));
}

#[test]
fn unemployed_applicant_is_always_denied() {
    let mut input = scoring_input();
    input.employment.employment_status = EmploymentStatus::Unemployed;
    input.employment.salary = dec!(1000000);

    let error = credit_finalizer()
        .finalize(&input, today())
        .expect_err("unemployed denied");

    match error {
        CalculationError::Denied(denial) => {
            assert_eq!(denial.reason, DenialReason::Unemployed);
            assert_eq!(denial.account_number, input.account_number);
            assert!(denial.to_string().contains("40817810099910004312"));
        }
        other => panic!("expected denial, got {other:?}"),
    }
}

#[test]
fn every_denial_rule_blocks_the_credit() {
    let finalizer = credit_finalizer();
    let mut cases = Vec::new();

    let mut input = scoring_input();
    input.employment.employment_status = EmploymentStatus::Unemployed;
    cases.push(input);

    let mut input = scoring_input();
    input.employment.salary = dec!(1);
    cases.push(input);

    let mut input = scoring_input();
    input.birthdate = born_years_ago(90);
    cases.push(input);

    let mut input = scoring_input();
    input.employment.work_experience_total = 1;
    cases.push(input);

    let mut input = scoring_input();
    input.employment.work_experience_current = 1;
    cases.push(input);

    for input in cases {
        let result = finalizer.finalize(&input, today());
        assert!(
            matches!(result, Err(CalculationError::Denied(_))),
            "expected denial, got {result:?}"
        );
    }
}

#[test]
fn calculator_rejects_non_positive_salary_as_invalid_input() {
    let mut input = scoring_input();
    input.employment.salary = Decimal::ZERO;

    let error = calculator()
        .calculate_credit_on(&input, today())
        .expect_err("zero salary rejected");

    assert_eq!(
        error,
        CalculationError::InvalidInput(InvalidInput::NonPositiveSalary(Decimal::ZERO))
    );
}

#[test]
fn calculator_rejects_short_term_before_scoring() {
    let mut input = scoring_input();
    input.term = 3;
    input.employment.employment_status = EmploymentStatus::Unemployed;

    let error = calculator()
        .calculate_credit_on(&input, today())
        .expect_err("short term rejected");

    assert!(matches!(
        error,
        CalculationError::InvalidInput(InvalidInput::TermBelowMinimum { .. })
    ));
}

#[test]
fn calculator_matches_finalizer() {
    let input = scoring_input();
    let via_calculator = calculator()
        .calculate_credit_on(&input, today())
        .expect("credit approved");
    let via_finalizer = credit_finalizer()
        .finalize(&input, today())
        .expect("credit approved");
    assert_eq!(via_calculator, via_finalizer);
}

#[test]
fn calculator_reports_overflow_for_extreme_salary() {
    let mut input = scoring_input();
    input.employment.salary = Decimal::MAX;

    let error = calculator()
        .calculate_credit_on(&input, today())
        .expect_err("salary limit overflows");

    assert_eq!(
        error,
        CalculationError::InvalidInput(InvalidInput::Overflow("salary limit"))
    );
}

#[test]
fn calculator_reports_overflow_for_extreme_long_loans() {
    let mut input = scoring_input();
    input.amount = dec!(50000000000000000000000000000);
    input.term = 600;
    input.employment.salary = dec!(3000000000000000000000000000);

    let error = calculator()
        .calculate_credit_on(&input, today())
        .expect_err("installment overflows");

    assert_eq!(
        error,
        CalculationError::InvalidInput(InvalidInput::Overflow("monthly installment"))
    );
}
