//! Derived summary types
//!
//! These are computed on demand from a profile plus expenses and are never
//! persisted as authoritative data.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::category::ExpenseCategory;
use super::money::Money;

/// Overall financial health for a period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    Excellent,
    OnTrack,
    Warning,
    OverBudget,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::OnTrack => write!(f, "On track"),
            Self::Warning => write!(f, "Warning"),
            Self::OverBudget => write!(f, "Over budget"),
        }
    }
}

/// Grade band for a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryStatus {
    Excellent,
    Good,
    Warning,
    Critical,
}

impl CategoryStatus {
    /// Letter grade for display (A-D)
    pub fn letter(&self) -> char {
        match self {
            Self::Excellent => 'A',
            Self::Good => 'B',
            Self::Warning => 'C',
            Self::Critical => 'D',
        }
    }
}

impl fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::Good => write!(f, "Good"),
            Self::Warning => write!(f, "Warning"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

/// Rubric result for one category
#[derive(Debug, Clone)]
pub struct CategoryAnalysis {
    pub category: ExpenseCategory,
    pub amount: Money,
    /// Percent of total income spent on this category
    pub percentage: f64,
    pub status: CategoryStatus,
    /// Suggestion text; None when the category is within its thresholds
    pub recommendation: Option<String>,
}

/// Derived monthly summary
///
/// Invariant: `remaining_budget == total_income - total_expenses`.
#[derive(Debug, Clone)]
pub struct FinancialSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub remaining_budget: Money,
    pub expenses_by_category: HashMap<ExpenseCategory, Money>,
    pub budget_status: BudgetStatus,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_grades() {
        assert_eq!(CategoryStatus::Excellent.letter(), 'A');
        assert_eq!(CategoryStatus::Good.letter(), 'B');
        assert_eq!(CategoryStatus::Warning.letter(), 'C');
        assert_eq!(CategoryStatus::Critical.letter(), 'D');
    }

    #[test]
    fn test_status_display() {
        assert_eq!(BudgetStatus::OnTrack.to_string(), "On track");
        assert_eq!(BudgetStatus::OverBudget.to_string(), "Over budget");
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&BudgetStatus::OverBudget).unwrap();
        assert_eq!(json, "\"over_budget\"");
    }
}
