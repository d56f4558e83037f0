//! Monthly rubric report
//!
//! Renders a user's month - per-category spending with grades, totals,
//! overall status, and recommendations - for the terminal or CSV export.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetStatus, CategoryAnalysis, Money};
use crate::services::SummaryService;
use crate::storage::Storage;

/// Monthly rubric report
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub year: i32,
    pub month: u32,
    /// One row per category with spending, in category order
    pub rows: Vec<CategoryAnalysis>,
    pub total_income: Money,
    pub total_expenses: Money,
    pub remaining_budget: Money,
    pub budget_status: BudgetStatus,
    pub recommendations: Vec<String>,
}

impl SummaryReport {
    /// Generate the report for a user's calendar month
    pub fn generate(
        storage: &Storage,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> BudgetResult<Self> {
        let service = SummaryService::new(storage);
        let summary = service.monthly_summary(user_id, year, month)?;
        let analyses = service.monthly_analyses(user_id, year, month)?;

        // Categories with no spending stay out of the table
        let rows: Vec<_> = analyses
            .into_iter()
            .filter(|a| !a.amount.is_zero())
            .collect();

        Ok(Self {
            year,
            month,
            rows,
            total_income: summary.total_income,
            total_expenses: summary.total_expenses,
            remaining_budget: summary.remaining_budget,
            budget_status: summary.budget_status,
            recommendations: summary.recommendations,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Budget Summary: {}-{:02}\n", self.year, self.month));
        output.push_str(&"=".repeat(64));
        output.push('\n');

        output.push_str(&format!(
            "{:<20} {:>12} {:>10} {:>8}\n",
            "Category", "Amount", "% Income", "Grade"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} {:>12} {:>9.1}% {:>8}\n",
                row.category.name(),
                row.amount.to_string(),
                row.percentage,
                row.status.letter(),
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>12}\n", "Income", self.total_income));
        output.push_str(&format!("{:<20} {:>12}\n", "Expenses", self.total_expenses));
        output.push_str(&format!("{:<20} {:>12}\n", "Remaining", self.remaining_budget));
        output.push_str(&format!("\nStatus: {}\n", self.budget_status));

        if !self.recommendations.is_empty() {
            output.push_str("\nRecommendations:\n");
            for rec in &self.recommendations {
                output.push_str(&format!("  - {}\n", rec));
            }
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> BudgetResult<()> {
        writeln!(writer, "Month,Category,Amount,Percentage,Grade")
            .map_err(|e| BudgetError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{}-{:02},{},{:.2},{:.2},{}",
                self.year,
                self.month,
                row.category.name(),
                row.amount.cents() as f64 / 100.0,
                row.percentage,
                row.status.letter(),
            )
            .map_err(|e| BudgetError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "{}-{:02},TOTAL,{:.2},,{}",
            self.year,
            self.month,
            self.total_expenses.cents() as f64 / 100.0,
            self.budget_status,
        )
        .map_err(|e| BudgetError::Export(e.to_string()))?;

        Ok(())
    }
}
