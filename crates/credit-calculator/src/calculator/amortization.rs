use std::sync::Arc;

use chrono::{Months, NaiveDate};
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use super::config::CalculatorConfig;
use super::domain::PaymentScheduleEntry;
use super::error::InvalidInput;

/// Monetary scale for every presented amount.
pub const MONEY_SCALE: u32 = 2;
const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

pub(crate) fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, ROUNDING)
}

/// Annuity math and schedule generation.
#[derive(Debug, Clone)]
pub struct AmortizationEngine {
    config: Arc<CalculatorConfig>,
}

impl AmortizationEngine {
    pub fn new(config: Arc<CalculatorConfig>) -> Self {
        Self { config }
    }

    /// Principal actually borrowed once the optional insurance premium is financed.
    pub fn financed_amount(
        &self,
        requested_amount: Decimal,
        insurance_enabled: bool,
    ) -> Result<Decimal, InvalidInput> {
        if !insurance_enabled {
            return Ok(round_money(requested_amount));
        }

        requested_amount
            .checked_mul(self.config.insurance_coefficient)
            .map(round_money)
            .ok_or(InvalidInput::Overflow("financed amount"))
    }

    /// `annual_rate_percent / 100 / 12`, kept to the configured significant digits.
    pub fn monthly_rate(&self, annual_rate_percent: Decimal) -> Result<Decimal, InvalidInput> {
        if annual_rate_percent.is_sign_negative() && !annual_rate_percent.is_zero() {
            return Err(InvalidInput::NegativeRate(annual_rate_percent));
        }
        if annual_rate_percent.is_zero() {
            return Ok(Decimal::ZERO);
        }

        (annual_rate_percent / dec!(1200))
            .round_sf_with_strategy(self.config.monthly_rate_precision, ROUNDING)
            .ok_or(InvalidInput::Overflow("monthly rate"))
    }

    /// Unrounded annuity payment; callers round for presentation.
    pub fn monthly_installment(
        &self,
        amount: Decimal,
        term_months: u32,
        annual_rate_percent: Decimal,
    ) -> Result<Decimal, InvalidInput> {
        if term_months == 0 {
            return Err(InvalidInput::TermBelowMinimum {
                minimum: 1,
                found: term_months,
            });
        }

        let monthly_rate = self.monthly_rate(annual_rate_percent)?;
        if monthly_rate.is_zero() {
            return Ok(amount / Decimal::from(term_months));
        }

        let factor = (Decimal::ONE + monthly_rate)
            .checked_powu(u64::from(term_months))
            .ok_or(InvalidInput::Overflow("annuity factor"))?;

        amount
            .checked_mul(monthly_rate)
            .and_then(|value| value.checked_mul(factor))
            .and_then(|value| value.checked_div(factor - Decimal::ONE))
            .ok_or(InvalidInput::Overflow("monthly installment"))
    }

    /// Total cost of credit ("psk").
    pub fn total_cost_of_credit(
        &self,
        monthly_payment: Decimal,
        term_months: u32,
    ) -> Result<Decimal, InvalidInput> {
        monthly_payment
            .checked_mul(Decimal::from(term_months))
            .map(round_money)
            .ok_or(InvalidInput::Overflow("total cost of credit"))
    }

    /// Forward recurrence over periods `1..=term_months`.
    ///
    /// Interest is charged on the 2dp running balance. The last period repays whatever balance is
    /// left so the schedule closes at exactly zero.
    pub fn generate_schedule(
        &self,
        amount: Decimal,
        term_months: u32,
        monthly_payment: Decimal,
        annual_rate_percent: Decimal,
        issue_date: NaiveDate,
    ) -> Result<Vec<PaymentScheduleEntry>, InvalidInput> {
        let monthly_rate = self.monthly_rate(annual_rate_percent)?;
        let mut remaining = round_money(amount);
        let mut schedule = Vec::with_capacity(term_months as usize);

        for number in 1..=term_months {
            let date = issue_date
                .checked_add_months(Months::new(number))
                .ok_or(InvalidInput::DateOverflow(number))?;

            let interest_payment = remaining
                .checked_mul(monthly_rate)
                .map(round_money)
                .ok_or(InvalidInput::Overflow("schedule interest"))?;
            let debt_payment = if number == term_months {
                remaining
            } else {
                monthly_payment
                    .checked_sub(interest_payment)
                    .map(round_money)
                    .ok_or(InvalidInput::Overflow("schedule principal"))?
            };
            remaining = remaining
                .checked_sub(debt_payment)
                .ok_or(InvalidInput::Overflow("remaining debt"))?;
            let total_payment = interest_payment
                .checked_add(debt_payment)
                .ok_or(InvalidInput::Overflow("schedule payment"))?;

            schedule.push(PaymentScheduleEntry {
                number,
                date,
                total_payment,
                interest_payment,
                debt_payment,
                remaining_debt: remaining,
            });
        }

        Ok(schedule)
    }
}
