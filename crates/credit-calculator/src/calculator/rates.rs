use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::config::{CalculatorConfig, RiskFactor};
use super::domain::{EmploymentStatus, FamilyStatus, Gender, Position, ScoringInput};
use super::error::InvalidInput;
use super::validation::age_on;

/// Adjustment contributed by one risk factor, kept for audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateComponent {
    pub factor: RiskFactor,
    pub adjustment: Decimal,
}

/// Base rate plus every applied adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateBreakdown {
    pub base_rate: Decimal,
    pub components: Vec<RateComponent>,
}

impl RateBreakdown {
    pub fn total(&self) -> Decimal {
        self.base_rate
            + self
                .components
                .iter()
                .map(|component| component.adjustment)
                .sum::<Decimal>()
    }
}

/// Stateless rate calculator over a shared configuration.
#[derive(Debug, Clone)]
pub struct RateEngine {
    config: Arc<CalculatorConfig>,
}

impl RateEngine {
    pub fn new(config: Arc<CalculatorConfig>) -> Self {
        Self { config }
    }

    pub fn compute_preliminary_rate(&self, insurance_enabled: bool, salary_client: bool) -> Decimal {
        self.breakdown(preliminary_factors(insurance_enabled, salary_client))
            .total()
    }

    pub fn compute_scoring_rate(
        &self,
        input: &ScoringInput,
        today: NaiveDate,
    ) -> Result<Decimal, InvalidInput> {
        Ok(self.scoring_breakdown(input, today)?.total())
    }

    /// Scoring rate with the contribution of each factor listed.
    pub fn scoring_breakdown(
        &self,
        input: &ScoringInput,
        today: NaiveDate,
    ) -> Result<RateBreakdown, InvalidInput> {
        let age = age_on(input.birthdate, today)?;

        let mut factors =
            preliminary_factors(input.is_insurance_enabled, input.is_salary_client);
        factors.extend(employment_factor(input.employment.employment_status));
        factors.extend(position_factor(input.employment.position));
        factors.extend(family_factor(input.family_status));
        factors.extend(demographic_factor(input.gender, age));

        Ok(self.breakdown(factors))
    }

    fn breakdown(&self, factors: Vec<RiskFactor>) -> RateBreakdown {
        let components = factors
            .into_iter()
            .map(|factor| RateComponent {
                factor,
                adjustment: self.config.adjustment(factor),
            })
            .collect();

        RateBreakdown {
            base_rate: self.config.base_rate,
            components,
        }
    }
}

fn preliminary_factors(insurance_enabled: bool, salary_client: bool) -> Vec<RiskFactor> {
    let mut factors = Vec::with_capacity(6);
    if insurance_enabled {
        factors.push(RiskFactor::Insurance);
    }
    if salary_client {
        factors.push(RiskFactor::SalaryClient);
    }
    factors
}

fn employment_factor(status: EmploymentStatus) -> Option<RiskFactor> {
    match status {
        EmploymentStatus::SelfEmployed => Some(RiskFactor::SelfEmployed),
        EmploymentStatus::BusinessOwner => Some(RiskFactor::BusinessOwner),
        EmploymentStatus::Employed | EmploymentStatus::Unemployed => None,
    }
}

fn position_factor(position: Position) -> Option<RiskFactor> {
    match position {
        Position::Manager => Some(RiskFactor::Manager),
        Position::TopManager => Some(RiskFactor::TopManager),
        Position::Worker | Position::MiddleManager | Position::Owner => None,
    }
}

fn family_factor(status: FamilyStatus) -> Option<RiskFactor> {
    match status {
        FamilyStatus::Married => Some(RiskFactor::Married),
        FamilyStatus::Divorced => Some(RiskFactor::Divorced),
        FamilyStatus::Single | FamilyStatus::WidowWidower => None,
    }
}

fn demographic_factor(gender: Gender, age: u32) -> Option<RiskFactor> {
    match (gender, age) {
        (Gender::Female, 32..=60) => Some(RiskFactor::FemaleAgeBand),
        (Gender::Male, 30..=50) => Some(RiskFactor::MaleAgeBand),
        (_, 18..) => Some(RiskFactor::OtherAdult),
        _ => None,
    }
}
