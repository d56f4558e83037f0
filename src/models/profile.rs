//! Financial profile model
//!
//! A profile records a user's income configuration. Profiles are created the
//! first time a user sets their income, mutated on income edits, and never
//! deleted - only deactivated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ProfileId;
use super::money::Money;

/// How often the user's income arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IncomeFrequency {
    #[default]
    Monthly,
    Weekly,
}

impl fmt::Display for IncomeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Weekly => write!(f, "weekly"),
        }
    }
}

impl std::str::FromStr for IncomeFrequency {
    type Err = crate::error::BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monthly" | "month" => Ok(Self::Monthly),
            "weekly" | "week" => Ok(Self::Weekly),
            other => Err(crate::error::BudgetError::Validation(format!(
                "Unknown income frequency '{}' (expected 'monthly' or 'weekly')",
                other
            ))),
        }
    }
}

/// Validation errors for financial profiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    EmptyUserId,
    NegativeIncome,
}

impl fmt::Display for ProfileValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUserId => write!(f, "User id cannot be empty"),
            Self::NegativeIncome => write!(f, "Income cannot be negative"),
        }
    }
}

impl std::error::Error for ProfileValidationError {}

/// A user's income configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialProfile {
    /// Unique identifier
    pub id: ProfileId,

    /// Owner of this profile
    pub user_id: String,

    /// Income per month
    pub monthly_income: Money,

    /// Income per week (derived from monthly when frequency is Monthly,
    /// authoritative when frequency is Weekly)
    pub weekly_income: Money,

    /// Which of the two income figures the user actually entered
    pub income_frequency: IncomeFrequency,

    /// Deactivated profiles are kept for history but ignored by lookups
    #[serde(default = "default_active")]
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

/// Weeks per month used to convert between income frequencies
const WEEKS_PER_MONTH: f64 = 52.0 / 12.0;

impl FinancialProfile {
    /// Create a new active profile from an income figure
    pub fn new(user_id: impl Into<String>, income: Money, frequency: IncomeFrequency) -> Self {
        let now = Utc::now();
        let (monthly, weekly) = derive_incomes(income, frequency);
        Self {
            id: ProfileId::new(),
            user_id: user_id.into(),
            monthly_income: monthly,
            weekly_income: weekly,
            income_frequency: frequency,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the income figure, re-deriving the complementary one
    pub fn set_income(&mut self, income: Money, frequency: IncomeFrequency) {
        let (monthly, weekly) = derive_incomes(income, frequency);
        self.monthly_income = monthly;
        self.weekly_income = weekly;
        self.income_frequency = frequency;
        self.updated_at = Utc::now();
    }

    /// Deactivate this profile (profiles are never deleted)
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Validate the profile
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if self.user_id.trim().is_empty() {
            return Err(ProfileValidationError::EmptyUserId);
        }
        if self.monthly_income.is_negative() || self.weekly_income.is_negative() {
            return Err(ProfileValidationError::NegativeIncome);
        }
        Ok(())
    }
}

/// Derive the (monthly, weekly) pair from the entered figure
fn derive_incomes(income: Money, frequency: IncomeFrequency) -> (Money, Money) {
    match frequency {
        IncomeFrequency::Monthly => {
            let weekly = Money::from_cents((income.cents() as f64 / WEEKS_PER_MONTH).round() as i64);
            (income, weekly)
        }
        IncomeFrequency::Weekly => {
            let monthly = Money::from_cents((income.cents() as f64 * WEEKS_PER_MONTH).round() as i64);
            (monthly, income)
        }
    }
}
