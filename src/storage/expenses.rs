//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json, with per-user,
//! per-category, and per-month queries.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{Datelike, NaiveDate};

use crate::error::BudgetError;
use crate::models::{Expense, ExpenseCategory, ExpenseId, Money};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ExpenseData {
    pub expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    expenses: RwLock<HashMap<ExpenseId, Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), BudgetError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        expenses.clear();
        for expense in file_data.expenses {
            expenses.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), BudgetError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = expenses.values().cloned().collect();
        list.sort_by(|a, b| (a.date, a.created_at).cmp(&(b.date, b.created_at)));

        write_json_atomic(&self.path, &ExpenseData { expenses: list })
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, BudgetError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(expenses.get(&id).cloned())
    }

    /// Get all expenses for a user, most recent date first
    pub fn get_for_user(&self, user_id: &str) -> Result<Vec<Expense>, BudgetError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = expenses
            .values()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| (b.date, b.created_at).cmp(&(a.date, a.created_at)));
        Ok(list)
    }

    /// Get a user's expenses in a category
    pub fn get_by_category(
        &self,
        user_id: &str,
        category: ExpenseCategory,
    ) -> Result<Vec<Expense>, BudgetError> {
        Ok(self
            .get_for_user(user_id)?
            .into_iter()
            .filter(|e| e.category == category)
            .collect())
    }

    /// Get a user's expenses falling in a calendar month
    pub fn get_for_month(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<Expense>, BudgetError> {
        Ok(self
            .get_for_user(user_id)?
            .into_iter()
            .filter(|e| e.date.year() == year && e.date.month() == month)
            .collect())
    }

    /// Total spending per category for a user in a calendar month
    pub fn monthly_totals_by_category(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<HashMap<ExpenseCategory, Money>, BudgetError> {
        let mut totals: HashMap<ExpenseCategory, Money> = HashMap::new();
        for expense in self.get_for_month(user_id, year, month)? {
            *totals.entry(expense.category).or_insert_with(Money::zero) += expense.amount;
        }
        Ok(totals)
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), BudgetError> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        expenses.insert(expense.id, expense);
        Ok(())
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> Result<bool, BudgetError> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(expenses.remove(&id).is_some())
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, BudgetError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(expenses.len())
    }
}

/// Parse a "YYYY-MM" month argument into (year, month)
pub fn parse_month(s: &str) -> Result<(i32, u32), BudgetError> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .map_err(|_| BudgetError::Validation(format!("Invalid month (expected YYYY-MM): {}", s)))?;
    Ok((d.year(), d.month()))
}
