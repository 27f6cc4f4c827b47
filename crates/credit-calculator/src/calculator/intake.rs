//! Field-level checks applied to HTTP payloads before they reach the engines.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::domain::{Employment, LoanRequest, ScoringInput};
use super::validation::{age_on, MIN_AMOUNT, MIN_TERM_MONTHS};

const MIN_APPLICANT_AGE: u32 = 18;

lazy_static! {
    static ref LATIN_NAME_REGEX: Regex =
        Regex::new(r"^[a-zA-Z]{2,30}$").expect("Invalid regex pattern");
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9_!#$%&'*+/=?`{|}~^.-]+@[a-zA-Z0-9.-]+$")
            .expect("Invalid regex pattern");
    static ref PASSPORT_SERIES_REGEX: Regex =
        Regex::new(r"^[0-9]{4}$").expect("Invalid regex pattern");
    static ref PASSPORT_NUMBER_REGEX: Regex =
        Regex::new(r"^[0-9]{6}$").expect("Invalid regex pattern");
    static ref EMPLOYER_INN_REGEX: Regex =
        Regex::new(r"^[0-9]{10}$").expect("Invalid regex pattern");
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Default)]
struct Violations(Vec<FieldError>);

impl Violations {
    fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.0.push(FieldError {
                field: field.to_string(),
                message: message.to_string(),
            });
        }
    }

    fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.0)
        }
    }
}

pub fn validate_loan_request(request: &LoanRequest, today: NaiveDate) -> Result<(), Vec<FieldError>> {
    let mut violations = Violations::default();
    check_terms(&mut violations, request.amount, request.term);
    violations.check(
        LATIN_NAME_REGEX.is_match(&request.first_name),
        "firstName",
        "must be 2 to 30 Latin letters",
    );
    violations.check(
        LATIN_NAME_REGEX.is_match(&request.last_name),
        "lastName",
        "must be 2 to 30 Latin letters",
    );
    check_middle_name(&mut violations, request.middle_name.as_deref());
    violations.check(
        EMAIL_REGEX.is_match(&request.email),
        "email",
        "must be a valid email address",
    );
    check_adult(&mut violations, request.birthdate, today);
    check_passport(
        &mut violations,
        &request.passport_series,
        &request.passport_number,
    );
    violations.finish()
}

pub fn validate_scoring_input(input: &ScoringInput, today: NaiveDate) -> Result<(), Vec<FieldError>> {
    let mut violations = Violations::default();
    check_terms(&mut violations, input.amount, input.term);
    check_middle_name(&mut violations, input.middle_name.as_deref());
    check_adult(&mut violations, input.birthdate, today);
    check_passport(&mut violations, &input.passport_series, &input.passport_number);
    violations.check(
        input.passport_issue_date <= today,
        "passportIssueDate",
        "must not be in the future",
    );
    violations.check(
        !input.passport_issue_branch.trim().is_empty(),
        "passportIssueBranch",
        "must be filled in",
    );
    violations.check(
        !input.account_number.trim().is_empty(),
        "accountNumber",
        "must be filled in",
    );
    check_employment(&mut violations, &input.employment);
    violations.finish()
}

fn check_terms(violations: &mut Violations, amount: Decimal, term: u32) {
    violations.check(amount >= MIN_AMOUNT, "amount", "must be at least 30000");
    violations.check(term >= MIN_TERM_MONTHS, "term", "must be at least 6 months");
}

fn check_middle_name(violations: &mut Violations, middle_name: Option<&str>) {
    if let Some(name) = middle_name {
        let length = name.chars().count();
        violations.check(
            (2..=30).contains(&length),
            "middleName",
            "must be 2 to 30 characters",
        );
    }
}

fn check_adult(violations: &mut Violations, birthdate: NaiveDate, today: NaiveDate) {
    let adult = age_on(birthdate, today)
        .map(|age| age >= MIN_APPLICANT_AGE)
        .unwrap_or(false);
    violations.check(adult, "birthdate", "applicant must be at least 18");
}

fn check_passport(violations: &mut Violations, series: &str, number: &str) {
    violations.check(
        PASSPORT_SERIES_REGEX.is_match(series),
        "passportSeries",
        "must be exactly 4 digits",
    );
    violations.check(
        PASSPORT_NUMBER_REGEX.is_match(number),
        "passportNumber",
        "must be exactly 6 digits",
    );
}

fn check_employment(violations: &mut Violations, employment: &Employment) {
    violations.check(
        EMPLOYER_INN_REGEX.is_match(&employment.employer_inn),
        "employment.employerINN",
        "must be exactly 10 digits",
    );
    violations.check(
        employment.salary > Decimal::ZERO,
        "employment.salary",
        "must be positive",
    );
}
