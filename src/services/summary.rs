//! Summary service
//!
//! Assembles the derived monthly picture - totals, budget status,
//! per-category analyses, recommendations - from the active profile and the
//! expense repository. The rubric math itself lives in pure functions; this
//! is the shell that feeds it stored data.

use crate::error::BudgetResult;
use crate::models::{CategoryAnalysis, ExpenseCategory, FinancialSummary, Money};
use crate::services::profile::ProfileService;
use crate::services::{recommend, rubric};
use crate::storage::Storage;

/// Service building monthly summaries
pub struct SummaryService<'a> {
    storage: &'a Storage,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Build the financial summary for a user's calendar month
    ///
    /// Requires an active profile; expenses outside the month are ignored.
    pub fn monthly_summary(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> BudgetResult<FinancialSummary> {
        let profile = ProfileService::new(self.storage).require_active(user_id)?;
        let total_income = profile.monthly_income;

        let expenses_by_category = self
            .storage
            .expenses
            .monthly_totals_by_category(user_id, year, month)?;
        let total_expenses: Money = expenses_by_category.values().copied().sum();

        let budget_status = rubric::classify(total_income, total_expenses);
        let recommendations = recommend::generate(total_income, &expenses_by_category, budget_status);

        Ok(FinancialSummary {
            total_income,
            total_expenses,
            remaining_budget: total_income - total_expenses,
            expenses_by_category,
            budget_status,
            recommendations,
        })
    }

    /// Per-category rubric analyses for a user's calendar month
    ///
    /// Covers every category, including those with no spending, in
    /// declaration order.
    pub fn monthly_analyses(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> BudgetResult<Vec<CategoryAnalysis>> {
        let profile = ProfileService::new(self.storage).require_active(user_id)?;
        let total_income = profile.monthly_income;

        let totals = self
            .storage
            .expenses
            .monthly_totals_by_category(user_id, year, month)?;

        let analyses = ExpenseCategory::all()
            .iter()
            .map(|category| {
                let amount = totals.get(category).copied().unwrap_or_else(Money::zero);
                let grade = rubric::grade(*category, amount, total_income);
                let recommendation = if grade.percentage > category.thresholds().warning {
                    Some(recommend::category_message(*category))
                } else {
                    None
                };
                CategoryAnalysis {
                    category: *category,
                    amount,
                    percentage: grade.percentage,
                    status: grade.status,
                    recommendation,
                }
            })
            .collect();

        Ok(analyses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::AppPaths;
    use crate::models::{BudgetStatus, CategoryStatus, IncomeFrequency};
    use crate::services::{ExpenseService, ProfileService};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn add_expense(storage: &Storage, category: ExpenseCategory, dollars: i64, day: u32) {
        ExpenseService::new(storage)
            .add(
                "sam",
                category,
                Money::from_dollars(dollars),
                "test",
                Some(NaiveDate::from_ymd_opt(2025, 9, day).unwrap()),
            )
            .unwrap();
    }

    #[test]
    fn test_month_with_rent_breach() {
        let (_temp_dir, storage) = create_test_storage();
        ProfileService::new(&storage)
            .set_income("sam", Money::from_dollars(8000), IncomeFrequency::Monthly)
            .unwrap();

        add_expense(&storage, ExpenseCategory::Rent, 3500, 1);
        add_expense(&storage, ExpenseCategory::Food, 1200, 10);
        add_expense(&storage, ExpenseCategory::Transportation, 800, 15);

        let summary = SummaryService::new(&storage)
            .monthly_summary("sam", 2025, 9)
            .unwrap();

        assert_eq!(summary.total_income.cents(), 800_000);
        assert_eq!(summary.total_expenses.cents(), 550_000);
        assert_eq!(summary.remaining_budget.cents(), 250_000);
        assert_eq!(summary.budget_status, BudgetStatus::Excellent);

        // Rent breaches its warning threshold; the rent message leads
        assert!(summary.recommendations[0].starts_with("Rent is taking"));
        assert!(summary.recommendations.len() <= recommend::MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_remaining_budget_invariant() {
        let (_temp_dir, storage) = create_test_storage();
        ProfileService::new(&storage)
            .set_income("sam", Money::from_dollars(1500), IncomeFrequency::Monthly)
            .unwrap();
        add_expense(&storage, ExpenseCategory::Rent, 900, 1);
        add_expense(&storage, ExpenseCategory::Food, 400, 2);

        let summary = SummaryService::new(&storage)
            .monthly_summary("sam", 2025, 9)
            .unwrap();
        assert_eq!(
            summary.remaining_budget,
            summary.total_income - summary.total_expenses
        );
    }

    #[test]
    fn test_analyses_cover_all_categories() {
        let (_temp_dir, storage) = create_test_storage();
        ProfileService::new(&storage)
            .set_income("sam", Money::from_dollars(2000), IncomeFrequency::Monthly)
            .unwrap();
        add_expense(&storage, ExpenseCategory::Rent, 900, 1); // 45% -> D

        let analyses = SummaryService::new(&storage)
            .monthly_analyses("sam", 2025, 9)
            .unwrap();

        assert_eq!(analyses.len(), ExpenseCategory::all().len());

        let rent = &analyses[0];
        assert_eq!(rent.category, ExpenseCategory::Rent);
        assert_eq!(rent.status, CategoryStatus::Critical);
        assert!(rent.recommendation.is_some());

        // Unspent categories grade A with no recommendation
        let health = analyses
            .iter()
            .find(|a| a.category == ExpenseCategory::Health)
            .unwrap();
        assert_eq!(health.status, CategoryStatus::Excellent);
        assert!(health.recommendation.is_none());
    }

    #[test]
    fn test_summary_requires_active_profile() {
        let (_temp_dir, storage) = create_test_storage();
        let result = SummaryService::new(&storage).monthly_summary("nobody", 2025, 9);
        assert!(result.is_err());
    }
}
