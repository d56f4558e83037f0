//! Profile CLI commands
//!
//! Implements CLI commands for managing financial profiles: setting income,
//! viewing the active profile, and deactivating it.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_profile_details;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{IncomeFrequency, Money};
use crate::services::ProfileService;
use crate::storage::Storage;

/// Profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Set your income, creating a profile if needed
    SetIncome {
        /// Income amount (e.g., "5000" or "5000.00")
        amount: String,

        /// Income frequency: monthly or weekly
        #[arg(short, long, default_value = "monthly")]
        frequency: String,

        /// User the profile belongs to
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Show the active profile
    Show {
        /// User the profile belongs to
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Deactivate the active profile
    Deactivate {
        /// User the profile belongs to
        #[arg(short, long)]
        user: Option<String>,
    },
}

/// Handle a profile command
pub fn handle_profile_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ProfileCommands,
) -> BudgetResult<()> {
    let service = ProfileService::new(storage);

    match cmd {
        ProfileCommands::SetIncome {
            amount,
            frequency,
            user,
        } => {
            let user = user.unwrap_or_else(|| settings.default_user.clone());
            let amount = Money::parse(&amount)
                .map_err(|e| BudgetError::Validation(format!("Invalid amount: {}", e)))?;
            let frequency: IncomeFrequency = frequency.parse()?;

            let profile = service.set_income(&user, amount, frequency)?;

            println!(
                "Income set to {} ({}) for '{}'",
                amount.format_with_symbol(&settings.currency_symbol),
                frequency,
                user
            );
            println!(
                "Monthly equivalent: {}",
                profile
                    .monthly_income
                    .format_with_symbol(&settings.currency_symbol)
            );
        }

        ProfileCommands::Show { user } => {
            let user = user.unwrap_or_else(|| settings.default_user.clone());

            match service.get_active(&user)? {
                Some(profile) => {
                    print!(
                        "{}",
                        format_profile_details(&profile, &settings.currency_symbol)
                    );
                }
                None => {
                    println!("No active profile for '{}'.", user);
                    println!("Run 'unibudget profile set-income <amount>' to create one.");
                }
            }
        }

        ProfileCommands::Deactivate { user } => {
            let user = user.unwrap_or_else(|| settings.default_user.clone());
            let profile = service.deactivate(&user)?;
            println!("Deactivated profile {} for '{}'", profile.id, user);
        }
    }

    Ok(())
}
