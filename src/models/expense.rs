//! Expense model
//!
//! A single categorized spending record for a user.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::Money;

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyUserId,
    EmptyDescription,
    NonPositiveAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUserId => write!(f, "User id cannot be empty"),
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Amount must be positive"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A categorized spending record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Owner of this expense
    pub user_id: String,

    /// Spending category
    pub category: ExpenseCategory,

    /// Amount spent (always positive)
    pub amount: Money,

    /// What the money went to
    pub description: String,

    /// When the expense occurred
    pub date: NaiveDate,

    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense dated today
    pub fn new(
        user_id: impl Into<String>,
        category: ExpenseCategory,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        Self::on_date(user_id, category, amount, description, Utc::now().date_naive())
    }

    /// Create a new expense for a specific date
    pub fn on_date(
        user_id: impl Into<String>,
        category: ExpenseCategory,
        amount: Money,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            user_id: user_id.into(),
            category,
            amount,
            description: description.into(),
            date,
            created_at: Utc::now(),
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.user_id.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyUserId);
        }
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}
