//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod profile;
pub mod summary;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use profile::{handle_profile_command, ProfileCommands};
pub use summary::{handle_analyze_command, handle_summary_command};
