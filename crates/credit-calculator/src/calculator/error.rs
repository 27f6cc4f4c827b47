use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::eligibility::DenialReason;

/// Failure of an offer or credit calculation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculationError {
    #[error(transparent)]
    Denied(#[from] Denial),
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
}

/// Business rejection raised by the eligibility rules.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("denied loan for account {account_number}: {}", .reason.summary())]
pub struct Denial {
    pub account_number: String,
    pub reason: DenialReason,
}

/// Precondition violated by a caller reaching the core directly.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    #[error("amount {found} is below the minimum of {minimum}")]
    AmountBelowMinimum { minimum: Decimal, found: Decimal },
    #[error("term of {found} months is below the minimum of {minimum}")]
    TermBelowMinimum { minimum: u32, found: u32 },
    #[error("salary must be positive (found {0})")]
    NonPositiveSalary(Decimal),
    #[error("birth date {birthdate} is after evaluation date {today}")]
    BirthdateInFuture { birthdate: NaiveDate, today: NaiveDate },
    #[error("annual rate {0} is negative")]
    NegativeRate(Decimal),
    #[error("schedule date overflow at period {0}")]
    DateOverflow(u32),
    #[error("decimal overflow while computing {0}")]
    Overflow(&'static str),
}
