use std::sync::Arc;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::info;

use super::amortization::AmortizationEngine;
use super::config::CalculatorConfig;
use super::domain::{Credit, LoanOffer, LoanRequest, ScoringInput};
use super::eligibility::EligibilityEngine;
use super::error::CalculationError;
use super::finalizer::CreditFinalizer;
use super::offers::OfferGenerator;
use super::rates::{RateBreakdown, RateEngine};
use super::validation::{check_loan_request, check_loan_terms, check_scoring_input};

/// Entry point composing the engines over one read-only configuration.
#[derive(Debug, Clone)]
pub struct LoanCalculator {
    config: Arc<CalculatorConfig>,
    rates: RateEngine,
    offers: OfferGenerator,
    finalizer: CreditFinalizer,
}

impl LoanCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        let config = Arc::new(config);
        let rates = RateEngine::new(config.clone());
        let amortization = AmortizationEngine::new(config.clone());
        let eligibility = EligibilityEngine::new(config.clone());

        Self {
            offers: OfferGenerator::new(rates.clone(), amortization.clone()),
            finalizer: CreditFinalizer::new(eligibility, rates.clone(), amortization),
            rates,
            config,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Four preliminary offers in `(insurance, salary_client)` order.
    pub fn generate_offers(&self, request: &LoanRequest) -> Result<[LoanOffer; 4], CalculationError> {
        info!(amount = %request.amount, term = request.term, "generating loan offers");
        check_loan_request(request)?;
        Ok(self.offers.generate(request)?)
    }

    /// Offers for an amount and term alone, as quoted from the command line.
    pub fn quote_offers(&self, amount: Decimal, term: u32) -> Result<[LoanOffer; 4], CalculationError> {
        info!(%amount, term, "quoting loan offers");
        check_loan_terms(amount, term)?;
        Ok(self.offers.quote(amount, term)?)
    }

    /// Score and amortize, issuing the credit today.
    pub fn calculate_credit(&self, input: &ScoringInput) -> Result<Credit, CalculationError> {
        self.calculate_credit_on(input, Local::now().date_naive())
    }

    pub fn calculate_credit_on(
        &self,
        input: &ScoringInput,
        issue_date: NaiveDate,
    ) -> Result<Credit, CalculationError> {
        info!(
            account = %input.account_number,
            amount = %input.amount,
            term = input.term,
            "calculating credit"
        );
        check_scoring_input(input, issue_date)?;
        self.finalizer.finalize(input, issue_date)
    }

    /// Rate components for an applicant, without the eligibility gate.
    pub fn rate_breakdown(
        &self,
        input: &ScoringInput,
        today: NaiveDate,
    ) -> Result<RateBreakdown, CalculationError> {
        Ok(self.rates.scoring_breakdown(input, today)?)
    }
}

impl Default for LoanCalculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}
