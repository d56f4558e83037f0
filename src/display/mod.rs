//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod analysis;
pub mod expense;

pub use analysis::format_analysis_table;
pub use expense::{format_expense_list, format_profile_details};
