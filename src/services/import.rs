//! CSV import service
//!
//! Imports expenses from CSV files with configurable column mapping and date
//! parsing. Bad rows are skipped and reported rather than aborting the
//! import.

use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, ExpenseCategory, Money};
use crate::storage::Storage;

/// Column mapping configuration for CSV import
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Index of the date column
    pub date_column: usize,
    /// Index of the category column
    pub category_column: usize,
    /// Index of the amount column
    pub amount_column: usize,
    /// Index of the description column
    pub description_column: usize,
    /// Date format string (e.g., "%Y-%m-%d", "%m/%d/%Y")
    pub date_format: String,
    /// Whether the first row is a header
    pub has_header: bool,
    /// Delimiter character
    pub delimiter: char,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            date_column: 0,
            category_column: 1,
            amount_column: 2,
            description_column: 3,
            date_format: "%Y-%m-%d".to_string(),
            has_header: true,
            delimiter: ',',
        }
    }
}

impl ColumnMapping {
    /// Set the date format
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }

    /// Set whether first row is a header
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }
}

/// Outcome of an import run
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Number of expenses imported
    pub imported: usize,
    /// Row numbers and reasons for skipped rows
    pub skipped: Vec<(usize, String)>,
}

/// Import expenses for a user from a CSV file
pub fn import_expenses_csv(
    storage: &Storage,
    user_id: &str,
    path: &Path,
    mapping: &ColumnMapping,
) -> BudgetResult<ImportResult> {
    let mut reader = ReaderBuilder::new()
        .has_headers(mapping.has_header)
        .delimiter(mapping.delimiter as u8)
        .flexible(true)
        .from_path(path)
        .map_err(|e| BudgetError::Import(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut result = ImportResult::default();
    let first_data_row = if mapping.has_header { 2 } else { 1 };

    for (i, record) in reader.records().enumerate() {
        let row = first_data_row + i;
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                result.skipped.push((row, format!("unreadable row: {}", e)));
                continue;
            }
        };

        match parse_row(user_id, &record, mapping) {
            Ok(expense) => {
                storage.expenses.upsert(expense)?;
                result.imported += 1;
            }
            Err(reason) => result.skipped.push((row, reason)),
        }
    }

    if result.imported > 0 {
        storage.expenses.save()?;
    }

    Ok(result)
}

/// Parse one CSV record into an expense; the error string names the problem
fn parse_row(
    user_id: &str,
    record: &csv::StringRecord,
    mapping: &ColumnMapping,
) -> Result<Expense, String> {
    let field = |idx: usize, name: &str| -> Result<&str, String> {
        record
            .get(idx)
            .map(str::trim)
            .ok_or_else(|| format!("missing {} column", name))
    };

    let date_str = field(mapping.date_column, "date")?;
    let date = NaiveDate::parse_from_str(date_str, &mapping.date_format)
        .map_err(|_| format!("invalid date: {}", date_str))?;

    let category_str = field(mapping.category_column, "category")?;
    let category: ExpenseCategory = category_str
        .parse()
        .map_err(|_| format!("unknown category: {}", category_str))?;

    let amount_str = field(mapping.amount_column, "amount")?;
    let amount =
        Money::parse(amount_str).map_err(|_| format!("invalid amount: {}", amount_str))?;

    let description = field(mapping.description_column, "description")?;

    let expense = Expense::on_date(user_id, category, amount, description, date);
    expense.validate().map_err(|e| e.to_string())?;
    Ok(expense)
}
