use chrono::NaiveDate;
use tracing::{debug, warn};

use super::amortization::{round_money, AmortizationEngine};
use super::domain::{Credit, ScoringInput};
use super::eligibility::{EligibilityDecision, EligibilityEngine};
use super::error::{CalculationError, Denial};
use super::rates::RateEngine;

/// Gate on eligibility, then score and amortize. Either a full `Credit` or an error.
#[derive(Debug, Clone)]
pub struct CreditFinalizer {
    eligibility: EligibilityEngine,
    rates: RateEngine,
    amortization: AmortizationEngine,
}

impl CreditFinalizer {
    pub fn new(
        eligibility: EligibilityEngine,
        rates: RateEngine,
        amortization: AmortizationEngine,
    ) -> Self {
        Self {
            eligibility,
            rates,
            amortization,
        }
    }

    /// `issue_date` doubles as the evaluation date for age checks.
    pub fn finalize(
        &self,
        input: &ScoringInput,
        issue_date: NaiveDate,
    ) -> Result<Credit, CalculationError> {
        if let EligibilityDecision::Denied(reason) = self.eligibility.evaluate(input, issue_date)? {
            warn!(
                account = %input.account_number,
                reason = %reason.summary(),
                "credit denied"
            );
            return Err(Denial {
                account_number: input.account_number.clone(),
                reason,
            }
            .into());
        }

        let amount = self
            .amortization
            .financed_amount(input.amount, input.is_insurance_enabled)?;
        let breakdown = self.rates.scoring_breakdown(input, issue_date)?;
        let rate = breakdown.total();
        debug!(%rate, components = ?breakdown.components, "scoring rate computed");

        let term = input.term;
        let monthly_payment = self
            .amortization
            .monthly_installment(amount, term, rate)?;
        let psk = self
            .amortization
            .total_cost_of_credit(monthly_payment, term)?;
        let payment_schedule = self.amortization.generate_schedule(
            amount,
            term,
            monthly_payment,
            rate,
            issue_date,
        )?;
        debug!(periods = payment_schedule.len(), %psk, "payment schedule generated");

        Ok(Credit {
            amount,
            term,
            monthly_payment: round_money(monthly_payment),
            rate,
            psk,
            is_insurance_enabled: input.is_insurance_enabled,
            is_salary_client: input.is_salary_client,
            payment_schedule,
        })
    }
}
