use rust_decimal::Decimal;

use super::amortization::{round_money, AmortizationEngine};
use super::domain::{LoanOffer, LoanRequest};
use super::error::InvalidInput;
use super::rates::RateEngine;

/// Flag pairs `(insurance, salary_client)` in presentation order.
pub const OFFER_COMBINATIONS: [(bool, bool); 4] =
    [(false, false), (false, true), (true, false), (true, true)];

/// Builds the four preliminary offers for a request.
#[derive(Debug, Clone)]
pub struct OfferGenerator {
    rates: RateEngine,
    amortization: AmortizationEngine,
}

impl OfferGenerator {
    pub fn new(rates: RateEngine, amortization: AmortizationEngine) -> Self {
        Self {
            rates,
            amortization,
        }
    }

    pub fn generate(&self, request: &LoanRequest) -> Result<[LoanOffer; 4], InvalidInput> {
        self.quote(request.amount, request.term)
    }

    /// Offers for a bare amount and term; applicant details do not affect pricing.
    pub fn quote(&self, amount: Decimal, term: u32) -> Result<[LoanOffer; 4], InvalidInput> {
        let [first, second, third, fourth] = OFFER_COMBINATIONS;
        Ok([
            self.offer(amount, term, first)?,
            self.offer(amount, term, second)?,
            self.offer(amount, term, third)?,
            self.offer(amount, term, fourth)?,
        ])
    }

    fn offer(
        &self,
        amount: Decimal,
        term: u32,
        (insurance_enabled, salary_client): (bool, bool),
    ) -> Result<LoanOffer, InvalidInput> {
        let rate = self
            .rates
            .compute_preliminary_rate(insurance_enabled, salary_client);
        let total_amount = self
            .amortization
            .financed_amount(amount, insurance_enabled)?;
        let monthly_payment =
            self.amortization
                .monthly_installment(total_amount, term, rate)?;

        Ok(LoanOffer {
            requested_amount: amount,
            total_amount,
            term,
            monthly_payment: round_money(monthly_payment),
            rate,
            is_insurance_enabled: insurance_enabled,
            is_salary_client: salary_client,
        })
    }
}
