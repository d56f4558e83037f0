//! Summary and analysis CLI commands
//!
//! Implements the monthly summary report and the per-category grade view.

use std::fs::File;

use chrono::{Datelike, Utc};

use crate::config::settings::Settings;
use crate::display::format_analysis_table;
use crate::error::{BudgetError, BudgetResult};
use crate::reports::SummaryReport;
use crate::services::SummaryService;
use crate::storage::{parse_month, Storage};

/// Resolve an optional "YYYY-MM" argument, defaulting to the current month
fn month_or_current(month: Option<&str>) -> BudgetResult<(i32, u32)> {
    match month {
        Some(m) => parse_month(m),
        None => {
            let now = Utc::now().date_naive();
            Ok((now.year(), now.month()))
        }
    }
}

/// Show the monthly summary report, optionally exporting it to CSV
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
    user: Option<String>,
    export: Option<String>,
) -> BudgetResult<()> {
    let user = user.unwrap_or_else(|| settings.default_user.clone());
    let (year, month) = month_or_current(month.as_deref())?;

    let report = SummaryReport::generate(storage, &user, year, month)?;

    match export {
        Some(path) => {
            let mut file = File::create(&path)
                .map_err(|e| BudgetError::Export(format!("Failed to create {}: {}", path, e)))?;
            report.export_csv(&mut file)?;
            println!("Exported summary for {}-{:02} to {}", year, month, path);
        }
        None => {
            print!("{}", report.format_terminal());
        }
    }

    Ok(())
}

/// Show per-category grades for a month
pub fn handle_analyze_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
    user: Option<String>,
) -> BudgetResult<()> {
    let user = user.unwrap_or_else(|| settings.default_user.clone());
    let (year, month) = month_or_current(month.as_deref())?;

    let service = SummaryService::new(storage);
    let analyses = service.monthly_analyses(&user, year, month)?;

    println!("Category Analysis: {}-{:02}", year, month);
    println!("{}", "=".repeat(52));
    print!(
        "{}",
        format_analysis_table(&analyses, &settings.currency_symbol)
    );

    Ok(())
}
