//! Expense CLI commands
//!
//! Implements CLI commands for recording, listing, removing, and importing
//! expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_expense_list;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{ExpenseCategory, ExpenseId, Money};
use crate::services::{import_expenses_csv, ColumnMapping, ExpenseService};
use crate::storage::{parse_month, Storage};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Expense category (e.g., "rent", "food", "savings")
        category: String,

        /// Amount (e.g., "45" or "45.50")
        amount: String,

        /// What the expense was for
        description: String,

        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// User the expense belongs to
        #[arg(short, long)]
        user: Option<String>,
    },

    /// List expenses
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,

        /// Filter by month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// User the expenses belong to
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Remove an expense by ID
    Remove {
        /// Expense ID (full UUID or the short "exp-" form)
        id: String,

        /// User the expense belongs to
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Import expenses from a CSV file
    Import {
        /// Path to the CSV file
        file: String,

        /// Date format in the file (e.g., "%m/%d/%Y")
        #[arg(long)]
        date_format: Option<String>,

        /// Treat the file as having no header row
        #[arg(long)]
        no_header: bool,

        /// User the expenses belong to
        #[arg(short, long)]
        user: Option<String>,
    },
}

/// Resolve a full UUID or short "exp-" display form to an expense ID
fn resolve_expense_id(
    service: &ExpenseService<'_>,
    user_id: &str,
    input: &str,
) -> BudgetResult<ExpenseId> {
    if let Ok(id) = input.parse::<ExpenseId>() {
        return Ok(id);
    }

    let matches: Vec<ExpenseId> = service
        .list(user_id, None, None)?
        .iter()
        .filter(|e| e.id.to_string() == input)
        .map(|e| e.id)
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(BudgetError::expense_not_found(input)),
        _ => Err(BudgetError::Validation(format!(
            "Expense id '{}' is ambiguous; use the full UUID",
            input
        ))),
    }
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            category,
            amount,
            description,
            date,
            user,
        } => {
            let user = user.unwrap_or_else(|| settings.default_user.clone());
            let category: ExpenseCategory = category.parse()?;
            let amount = Money::parse(&amount)
                .map_err(|e| BudgetError::Validation(format!("Invalid amount: {}", e)))?;
            let date = date
                .map(|d| {
                    chrono::NaiveDate::parse_from_str(&d, "%Y-%m-%d").map_err(|_| {
                        BudgetError::Validation(format!("Invalid date '{}' (expected YYYY-MM-DD)", d))
                    })
                })
                .transpose()?;

            let expense = service.add(&user, category, amount, &description, date)?;

            println!(
                "Recorded {} in {} on {} ({})",
                expense.amount.format_with_symbol(&settings.currency_symbol),
                expense.category.name(),
                expense.date.format("%Y-%m-%d"),
                expense.id
            );
        }

        ExpenseCommands::List {
            category,
            month,
            user,
        } => {
            let user = user.unwrap_or_else(|| settings.default_user.clone());
            let category = category.map(|c| c.parse::<ExpenseCategory>()).transpose()?;
            let month = month.map(|m| parse_month(&m)).transpose()?;

            let expenses = service.list(&user, category, month)?;
            print!(
                "{}",
                format_expense_list(&expenses, &settings.currency_symbol)
            );
            if !expenses.is_empty() {
                println!("\n{} expense(s)", expenses.len());
            }
        }

        ExpenseCommands::Remove { id, user } => {
            let user = user.unwrap_or_else(|| settings.default_user.clone());
            let id = resolve_expense_id(&service, &user, &id)?;
            service.remove(id)?;
            println!("Removed expense {}", id);
        }

        ExpenseCommands::Import {
            file,
            date_format,
            no_header,
            user,
        } => {
            let user = user.unwrap_or_else(|| settings.default_user.clone());

            let mut mapping = ColumnMapping::default().with_header(!no_header);
            if let Some(format) = &date_format {
                mapping = mapping.with_date_format(format);
            }

            let result = import_expenses_csv(storage, &user, file.as_ref(), &mapping)?;

            println!("Imported {} expense(s) from {}", result.imported, file);
            if !result.skipped.is_empty() {
                println!("Skipped {} row(s):", result.skipped.len());
                for (row, reason) in &result.skipped {
                    println!("  row {}: {}", row, reason);
                }
            }
        }
    }

    Ok(())
}
