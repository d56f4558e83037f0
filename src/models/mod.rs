//! Core data models for unibudget
//!
//! This module contains the data structures that represent the budgeting
//! domain: financial profiles, expenses, categories, and derived summaries.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod profile;
pub mod summary;

pub use category::{CategoryThresholds, ExpenseCategory};
pub use expense::Expense;
pub use ids::{ExpenseId, ProfileId};
pub use money::Money;
pub use profile::{FinancialProfile, IncomeFrequency};
pub use summary::{BudgetStatus, CategoryAnalysis, CategoryStatus, FinancialSummary};
