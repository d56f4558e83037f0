//! Expense display formatting

use crate::models::{Expense, FinancialProfile};

/// Format a table of expenses, newest first
pub fn format_expense_list(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let desc_width = expenses
        .iter()
        .map(|e| e.description.len())
        .max()
        .unwrap_or(11)
        .max(11);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:<14}  {:>12}  {:<width$}  {}\n",
        "Date",
        "Category",
        "Amount",
        "Description",
        "ID",
        width = desc_width
    ));
    output.push_str(&format!(
        "{:-<10}  {:-<14}  {:->12}  {:-<width$}  {:-<12}\n",
        "",
        "",
        "",
        "",
        "",
        width = desc_width
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<10}  {:<14}  {:>12}  {:<width$}  {}\n",
            expense.date.format("%Y-%m-%d"),
            expense.category.name(),
            expense.amount.format_with_symbol(currency_symbol),
            expense.description,
            expense.id,
            width = desc_width
        ));
    }

    output
}

/// Format profile details
pub fn format_profile_details(profile: &FinancialProfile, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Profile: {}\n", profile.user_id));
    output.push_str(&format!("  ID:             {}\n", profile.id));
    output.push_str(&format!(
        "  Monthly Income: {}\n",
        profile.monthly_income.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "  Weekly Income:  {}\n",
        profile.weekly_income.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("  Frequency:      {}\n", profile.income_frequency));
    output.push_str(&format!(
        "  Active:         {}\n",
        if profile.is_active { "Yes" } else { "No" }
    ));

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        profile.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        profile.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, IncomeFrequency, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_format_empty_list() {
        let output = format_expense_list(&[], "$");
        assert!(output.contains("No expenses found"));
    }

    #[test]
    fn test_format_expense_list() {
        let expense = Expense::on_date(
            "sam",
            ExpenseCategory::Food,
            Money::from_dollars(45),
            "Groceries",
            NaiveDate::from_ymd_opt(2025, 9, 12).unwrap(),
        );

        let output = format_expense_list(&[expense], "$");
        assert!(output.contains("2025-09-12"));
        assert!(output.contains("Food"));
        assert!(output.contains("$45.00"));
        assert!(output.contains("Groceries"));
    }

    #[test]
    fn test_format_profile_details() {
        let profile = FinancialProfile::new(
            "sam",
            Money::from_dollars(5000),
            IncomeFrequency::Monthly,
        );

        let output = format_profile_details(&profile, "$");
        assert!(output.contains("Profile: sam"));
        assert!(output.contains("$5000.00"));
        assert!(output.contains("Active:         Yes"));
    }
}
