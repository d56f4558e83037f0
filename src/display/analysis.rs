//! Category analysis display formatting

use crate::models::CategoryAnalysis;

/// Format per-category grades as a table, one row per category
pub fn format_analysis_table(analyses: &[CategoryAnalysis], currency_symbol: &str) -> String {
    if analyses.is_empty() {
        return "No category analysis available.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<16}  {:>12}  {:>9}  {:>6}\n",
        "Category", "Amount", "% Income", "Grade"
    ));
    output.push_str(&format!(
        "{:-<16}  {:->12}  {:->9}  {:->6}\n",
        "", "", "", ""
    ));

    for analysis in analyses {
        output.push_str(&format!(
            "{:<16}  {:>12}  {:>8.1}%  {:>6}\n",
            analysis.category.name(),
            analysis.amount.format_with_symbol(currency_symbol),
            analysis.percentage,
            analysis.status.letter(),
        ));
    }

    let flagged: Vec<_> = analyses
        .iter()
        .filter_map(|a| a.recommendation.as_deref())
        .collect();
    if !flagged.is_empty() {
        output.push('\n');
        for rec in flagged {
            output.push_str(&format!("  ! {}\n", rec));
        }
    }

    output
}
