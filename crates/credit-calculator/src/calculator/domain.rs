use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Indicative request captured before underwriting data is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    pub amount: Decimal,
    pub term: u32,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub email: String,
    pub birthdate: NaiveDate,
    pub passport_series: String,
    pub passport_number: String,
}

/// Employment snapshot submitted for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employment {
    pub employment_status: EmploymentStatus,
    #[serde(rename = "employerINN")]
    pub employer_inn: String,
    pub salary: Decimal,
    pub position: Position,
    /// Total work experience in months.
    pub work_experience_total: u32,
    /// Experience at the current employer in months.
    pub work_experience_current: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    BusinessOwner,
    Unemployed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    Worker,
    MiddleManager,
    Manager,
    TopManager,
    Owner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Female,
    Male,
    NonBinary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FamilyStatus {
    Married,
    Divorced,
    Single,
    WidowWidower,
}

/// Full applicant data consumed read-only by scoring and the credit calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringInput {
    pub amount: Decimal,
    pub term: u32,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub gender: Gender,
    pub birthdate: NaiveDate,
    pub passport_series: String,
    pub passport_number: String,
    pub passport_issue_date: NaiveDate,
    pub passport_issue_branch: String,
    #[serde(alias = "maritalStatus")]
    pub family_status: FamilyStatus,
    #[serde(default)]
    pub dependent_amount: u32,
    pub employment: Employment,
    pub account_number: String,
    pub is_insurance_enabled: bool,
    pub is_salary_client: bool,
}

/// Preliminary terms for one insurance/salary-client combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanOffer {
    pub requested_amount: Decimal,
    pub total_amount: Decimal,
    pub term: u32,
    pub monthly_payment: Decimal,
    pub rate: Decimal,
    pub is_insurance_enabled: bool,
    pub is_salary_client: bool,
}

/// Final, fully scored credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credit {
    pub amount: Decimal,
    pub term: u32,
    pub monthly_payment: Decimal,
    pub rate: Decimal,
    /// Total cost of credit.
    pub psk: Decimal,
    pub is_insurance_enabled: bool,
    pub is_salary_client: bool,
    pub payment_schedule: Vec<PaymentScheduleEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentScheduleEntry {
    pub number: u32,
    pub date: NaiveDate,
    pub total_payment: Decimal,
    pub interest_payment: Decimal,
    pub debt_payment: Decimal,
    pub remaining_debt: Decimal,
}

impl Credit {
    /// Sum of principal repaid across the schedule.
    pub fn scheduled_principal(&self) -> Decimal {
        self.payment_schedule
            .iter()
            .map(|entry| entry.debt_payment)
            .sum()
    }
}
