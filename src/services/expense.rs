//! Expense service
//!
//! Business logic for recording and querying categorized expenses.

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, ExpenseCategory, ExpenseId, Money};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record an expense
    pub fn add(
        &self,
        user_id: &str,
        category: ExpenseCategory,
        amount: Money,
        description: &str,
        date: Option<NaiveDate>,
    ) -> BudgetResult<Expense> {
        let expense = match date {
            Some(date) => Expense::on_date(user_id, category, amount, description, date),
            None => Expense::new(user_id, category, amount, description),
        };

        expense
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        Ok(expense)
    }

    /// Remove an expense by ID
    pub fn remove(&self, id: ExpenseId) -> BudgetResult<()> {
        if !self.storage.expenses.delete(id)? {
            return Err(BudgetError::expense_not_found(id.to_string()));
        }
        self.storage.expenses.save()?;
        Ok(())
    }

    /// List a user's expenses, optionally filtered by category and month
    pub fn list(
        &self,
        user_id: &str,
        category: Option<ExpenseCategory>,
        month: Option<(i32, u32)>,
    ) -> BudgetResult<Vec<Expense>> {
        let mut expenses = match month {
            Some((year, month)) => self.storage.expenses.get_for_month(user_id, year, month)?,
            None => self.storage.expenses.get_for_user(user_id)?,
        };

        if let Some(category) = category {
            expenses.retain(|e| e.category == category);
        }

        Ok(expenses)
    }

    /// Total spending for a user in a month
    pub fn monthly_total(&self, user_id: &str, year: i32, month: u32) -> BudgetResult<Money> {
        Ok(self
            .storage
            .expenses
            .get_for_month(user_id, year, month)?
            .iter()
            .map(|e| e.amount)
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::AppPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn sept(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, day).unwrap()
    }

    #[test]
    fn test_add_and_list() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service
            .add("sam", ExpenseCategory::Food, Money::from_cents(1250), "Groceries", Some(sept(5)))
            .unwrap();
        service
            .add("sam", ExpenseCategory::Rent, Money::from_dollars(850), "Rent", Some(sept(1)))
            .unwrap();

        let all = service.list("sam", None, None).unwrap();
        assert_eq!(all.len(), 2);

        let food = service
            .list("sam", Some(ExpenseCategory::Food), None)
            .unwrap();
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].description, "Groceries");
    }

    #[test]
    fn test_add_rejects_invalid() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let result = service.add("sam", ExpenseCategory::Food, Money::zero(), "Free lunch", None);
        assert!(matches!(result, Err(BudgetError::Validation(_))));

        let result = service.add("sam", ExpenseCategory::Food, Money::from_cents(500), "  ", None);
        assert!(matches!(result, Err(BudgetError::Validation(_))));
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service
            .add("sam", ExpenseCategory::Other, Money::from_cents(300), "Printing", None)
            .unwrap();

        service.remove(expense.id).unwrap();
        assert!(service.list("sam", None, None).unwrap().is_empty());

        assert!(matches!(
            service.remove(expense.id),
            Err(BudgetError::NotFound { .. })
        ));
    }

    #[test]
    fn test_monthly_total() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service
            .add("sam", ExpenseCategory::Food, Money::from_cents(1000), "a", Some(sept(1)))
            .unwrap();
        service
            .add("sam", ExpenseCategory::Food, Money::from_cents(2000), "b", Some(sept(2)))
            .unwrap();
        service
            .add(
                "sam",
                ExpenseCategory::Food,
                Money::from_cents(9000),
                "c",
                Some(NaiveDate::from_ymd_opt(2025, 8, 2).unwrap()),
            )
            .unwrap();

        let total = service.monthly_total("sam", 2025, 9).unwrap();
        assert_eq!(total.cents(), 3000);
    }
}
