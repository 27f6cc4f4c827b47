use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::config::CalculatorConfig;
use super::domain::{EmploymentStatus, ScoringInput};
use super::error::InvalidInput;
use super::validation::age_on;

/// Outcome of the hard denial rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EligibilityDecision {
    Eligible,
    Denied(DenialReason),
}

/// First failed rule, in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DenialReason {
    Unemployed,
    AmountExceedsSalaryMultiple {
        amount: Decimal,
        salary: Decimal,
        multiple: Decimal,
    },
    AgeOutOfRange {
        age: u32,
        min: u32,
        max: u32,
    },
    InsufficientTotalExperience {
        months: u32,
        required: u32,
    },
    InsufficientCurrentExperience {
        months: u32,
        required: u32,
    },
}

impl DenialReason {
    pub fn summary(&self) -> String {
        match self {
            DenialReason::Unemployed => "applicant is unemployed".to_string(),
            DenialReason::AmountExceedsSalaryMultiple {
                amount,
                salary,
                multiple,
            } => format!("amount {amount} exceeds {multiple} monthly salaries of {salary}"),
            DenialReason::AgeOutOfRange { age, min, max } => {
                format!("age {age} outside {min}..={max}")
            }
            DenialReason::InsufficientTotalExperience { months, required } => {
                format!("total experience {months} months, required {required}")
            }
            DenialReason::InsufficientCurrentExperience { months, required } => {
                format!("current job experience {months} months, required {required}")
            }
        }
    }
}

/// Stateless evaluator for the hard denial rules.
#[derive(Debug, Clone)]
pub struct EligibilityEngine {
    config: Arc<CalculatorConfig>,
}

impl EligibilityEngine {
    pub fn new(config: Arc<CalculatorConfig>) -> Self {
        Self { config }
    }

    pub fn evaluate(
        &self,
        input: &ScoringInput,
        today: NaiveDate,
    ) -> Result<EligibilityDecision, InvalidInput> {
        let limits = &self.config.eligibility;
        let employment = &input.employment;

        if employment.employment_status == EmploymentStatus::Unemployed {
            return Ok(EligibilityDecision::Denied(DenialReason::Unemployed));
        }

        let salary_limit = employment
            .salary
            .checked_mul(limits.max_salary_multiple)
            .ok_or(InvalidInput::Overflow("salary limit"))?;
        if input.amount > salary_limit {
            return Ok(EligibilityDecision::Denied(
                DenialReason::AmountExceedsSalaryMultiple {
                    amount: input.amount,
                    salary: employment.salary,
                    multiple: limits.max_salary_multiple,
                },
            ));
        }

        let age = age_on(input.birthdate, today)?;
        if age < limits.min_age || age > limits.max_age {
            return Ok(EligibilityDecision::Denied(DenialReason::AgeOutOfRange {
                age,
                min: limits.min_age,
                max: limits.max_age,
            }));
        }

        if employment.work_experience_total < limits.min_total_experience_months {
            return Ok(EligibilityDecision::Denied(
                DenialReason::InsufficientTotalExperience {
                    months: employment.work_experience_total,
                    required: limits.min_total_experience_months,
                },
            ));
        }

        if employment.work_experience_current < limits.min_current_experience_months {
            return Ok(EligibilityDecision::Denied(
                DenialReason::InsufficientCurrentExperience {
                    months: employment.work_experience_current,
                    required: limits.min_current_experience_months,
                },
            ));
        }

        Ok(EligibilityDecision::Eligible)
    }
}
