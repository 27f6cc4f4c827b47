//! Loan origination calculation core.
//!
//! Produces preliminary loan offers from a requested amount and term, and a fully scored
//! credit with its payment schedule once the applicant's employment data is known.

pub mod calculator;
pub mod config;
pub mod error;
pub mod telemetry;
