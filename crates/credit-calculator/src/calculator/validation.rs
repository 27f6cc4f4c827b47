use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::domain::{LoanRequest, ScoringInput};
use super::error::InvalidInput;

pub const MIN_AMOUNT: Decimal = dec!(30000);
pub const MIN_TERM_MONTHS: u32 = 6;

/// Whole calendar years elapsed between `birthdate` and `today`.
///
/// The Nth birthday is reached on the Nth anniversary; a Feb 29 birthday rolls to Mar 1.
pub fn age_on(birthdate: NaiveDate, today: NaiveDate) -> Result<u32, InvalidInput> {
    today
        .years_since(birthdate)
        .ok_or(InvalidInput::BirthdateInFuture { birthdate, today })
}

pub(crate) fn check_loan_terms(amount: Decimal, term: u32) -> Result<(), InvalidInput> {
    if amount < MIN_AMOUNT {
        return Err(InvalidInput::AmountBelowMinimum {
            minimum: MIN_AMOUNT,
            found: amount,
        });
    }
    if term < MIN_TERM_MONTHS {
        return Err(InvalidInput::TermBelowMinimum {
            minimum: MIN_TERM_MONTHS,
            found: term,
        });
    }
    Ok(())
}

pub(crate) fn check_loan_request(request: &LoanRequest) -> Result<(), InvalidInput> {
    check_loan_terms(request.amount, request.term)
}

pub(crate) fn check_scoring_input(
    input: &ScoringInput,
    today: NaiveDate,
) -> Result<(), InvalidInput> {
    check_loan_terms(input.amount, input.term)?;
    if input.employment.salary <= Decimal::ZERO {
        return Err(InvalidInput::NonPositiveSalary(input.employment.salary));
    }
    age_on(input.birthdate, today)?;
    Ok(())
}
