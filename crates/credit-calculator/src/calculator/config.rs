use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Rate adjustments, financing coefficient, and underwriting limits.
///
/// Adjustments are percentage points added to the annual rate; negative values are discounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub base_rate: Decimal,
    pub insurance_rate_reduction: Decimal,
    pub client_rate_reduction: Decimal,
    pub self_employed_rate_addition: Decimal,
    pub business_owner_rate_addition: Decimal,
    pub manager_rate_reduction: Decimal,
    pub top_manager_rate_reduction: Decimal,
    pub married_rate_reduction: Decimal,
    pub divorced_rate_addition: Decimal,
    pub female_rate_reduction: Decimal,
    pub male_rate_reduction: Decimal,
    pub non_binary_rate_addition: Decimal,
    /// Multiplier applied to the requested amount when insurance is bought.
    pub insurance_coefficient: Decimal,
    /// Significant digits kept for the monthly rate.
    pub monthly_rate_precision: u32,
    pub eligibility: EligibilityLimits,
}

/// Hard denial thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityLimits {
    pub max_salary_multiple: Decimal,
    pub min_age: u32,
    pub max_age: u32,
    pub min_total_experience_months: u32,
    pub min_current_experience_months: u32,
}

/// Risk factors that move the rate, keyed into [`CalculatorConfig::adjustment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskFactor {
    Insurance,
    SalaryClient,
    SelfEmployed,
    BusinessOwner,
    Manager,
    TopManager,
    Married,
    Divorced,
    FemaleAgeBand,
    MaleAgeBand,
    OtherAdult,
}

impl CalculatorConfig {
    /// Lookup table from risk factor to its additive rate adjustment.
    pub fn adjustment(&self, factor: RiskFactor) -> Decimal {
        match factor {
            RiskFactor::Insurance => self.insurance_rate_reduction,
            RiskFactor::SalaryClient => self.client_rate_reduction,
            RiskFactor::SelfEmployed => self.self_employed_rate_addition,
            RiskFactor::BusinessOwner => self.business_owner_rate_addition,
            RiskFactor::Manager => self.manager_rate_reduction,
            RiskFactor::TopManager => self.top_manager_rate_reduction,
            RiskFactor::Married => self.married_rate_reduction,
            RiskFactor::Divorced => self.divorced_rate_addition,
            RiskFactor::FemaleAgeBand => self.female_rate_reduction,
            RiskFactor::MaleAgeBand => self.male_rate_reduction,
            RiskFactor::OtherAdult => self.non_binary_rate_addition,
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            base_rate: dec!(15),
            insurance_rate_reduction: dec!(-3),
            client_rate_reduction: dec!(-1.1),
            self_employed_rate_addition: dec!(1),
            business_owner_rate_addition: dec!(3),
            manager_rate_reduction: dec!(-2),
            top_manager_rate_reduction: dec!(-3),
            married_rate_reduction: dec!(-3),
            divorced_rate_addition: dec!(1),
            female_rate_reduction: dec!(-3),
            male_rate_reduction: dec!(-3),
            non_binary_rate_addition: dec!(7),
            insurance_coefficient: dec!(1.10),
            monthly_rate_precision: 7,
            eligibility: EligibilityLimits::default(),
        }
    }
}

impl Default for EligibilityLimits {
    fn default() -> Self {
        Self {
            max_salary_multiple: dec!(25),
            min_age: 20,
            max_age: 60,
            min_total_experience_months: 18,
            min_current_experience_months: 3,
        }
    }
}
