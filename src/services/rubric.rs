//! Rubric grading and budget status classification
//!
//! Pure, synchronous, stateless functions: deterministic over their inputs,
//! no I/O, no shared state - safe to call from any context.

use crate::models::{BudgetStatus, CategoryStatus, CategoryThresholds, ExpenseCategory, Money};

/// Grade result for one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryGrade {
    /// Percent of total income spent on the category (0.0 when income is 0)
    pub percentage: f64,
    pub status: CategoryStatus,
}

impl CategoryGrade {
    /// Letter grade for display (A-D)
    pub fn letter(&self) -> char {
        self.status.letter()
    }
}

/// Grade a category's spending against its thresholds
///
/// Total over its domain: every category grades, zero income grades
/// (percentage defaults to 0, which lands in the A band for every
/// category except Savings).
pub fn grade(category: ExpenseCategory, amount: Money, total_income: Money) -> CategoryGrade {
    let percentage = amount.percent_of(total_income);
    let status = band_for(percentage, category.thresholds());
    CategoryGrade { percentage, status }
}

/// Map a percentage onto a threshold table's grade bands
///
/// Comparison direction is the same for every category, including Savings
/// with its inverted threshold values. That mismatch is inherited behavior,
/// pinned by a test below and flagged for product review - do not "fix" it
/// here without a decision.
fn band_for(percentage: f64, t: CategoryThresholds) -> CategoryStatus {
    if percentage <= t.excellent {
        CategoryStatus::Excellent
    } else if percentage <= t.good {
        CategoryStatus::Good
    } else if percentage <= t.warning {
        CategoryStatus::Warning
    } else {
        CategoryStatus::Critical
    }
}

/// Classify overall budget health from income and expenses
///
/// All comparisons are strict, which fixes the boundary behavior:
/// remaining exactly at 20% of income is OnTrack, not Excellent, and
/// zero remaining never grades above Warning. With zero income both
/// `0 > 0` checks fail, so zero income classifies as OverBudget even
/// with zero expenses.
pub fn classify(total_income: Money, total_expenses: Money) -> BudgetStatus {
    let remaining = total_income - total_expenses;
    let remaining = remaining.cents() as f64;
    let income = total_income.cents() as f64;

    if remaining > income * 0.2 {
        BudgetStatus::Excellent
    } else if remaining > 0.0 {
        BudgetStatus::OnTrack
    } else if remaining > -income * 0.1 {
        BudgetStatus::Warning
    } else {
        BudgetStatus::OverBudget
    }
}
