//! Rate determination, eligibility, and amortization.
//!
//! Every engine is a pure function of its inputs and a shared read-only [`CalculatorConfig`];
//! [`LoanCalculator`] wires them together for the offer and credit flows.

pub mod amortization;
pub mod config;
pub mod domain;
pub mod eligibility;
pub mod error;
pub mod finalizer;
pub mod intake;
pub mod offers;
pub mod rates;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use amortization::AmortizationEngine;
pub use config::{CalculatorConfig, EligibilityLimits, RiskFactor};
pub use domain::{
    Credit, Employment, EmploymentStatus, FamilyStatus, Gender, LoanOffer, LoanRequest,
    PaymentScheduleEntry, Position, ScoringInput,
};
pub use eligibility::{DenialReason, EligibilityDecision, EligibilityEngine};
pub use error::{CalculationError, Denial, InvalidInput};
pub use finalizer::CreditFinalizer;
pub use intake::FieldError;
pub use offers::OfferGenerator;
pub use rates::{RateBreakdown, RateComponent, RateEngine};
pub use router::calculator_router;
pub use service::LoanCalculator;
