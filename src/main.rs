use anyhow::Result;
use clap::{Parser, Subcommand};

use unibudget::cli::{
    handle_analyze_command, handle_expense_command, handle_profile_command,
    handle_summary_command,
};
use unibudget::config::{paths::AppPaths, settings::Settings};
use unibudget::storage::Storage;

#[derive(Parser)]
#[command(
    name = "unibudget",
    version,
    about = "Budget tracking with a spending rubric",
    long_about = "unibudget tracks your income and expenses, grades each spending \
                  category against percentage-of-income thresholds, and tells you \
                  whether the month is on track."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile management commands
    #[command(subcommand)]
    Profile(unibudget::cli::ProfileCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(unibudget::cli::ExpenseCommands),

    /// Show the monthly budget summary
    Summary {
        /// Month to summarize (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// User to summarize
        #[arg(short, long)]
        user: Option<String>,

        /// Export the summary to a CSV file instead of printing it
        #[arg(short, long)]
        export: Option<String>,
    },

    /// Show per-category spending grades
    Analyze {
        /// Month to analyze (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// User to analyze
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = AppPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Profile(cmd)) => {
            handle_profile_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Summary {
            month,
            user,
            export,
        }) => {
            handle_summary_command(&storage, &settings, month, user, export)?;
        }
        Some(Commands::Analyze { month, user }) => {
            handle_analyze_command(&storage, &settings, month, user)?;
        }
        Some(Commands::Init) => {
            println!("Initializing unibudget at: {}", paths.base_dir().display());
            unibudget::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  unibudget profile set-income 5000    set your monthly income");
            println!("  unibudget expense add food 45 \"Groceries\"");
            println!("  unibudget summary                    see how the month is going");
        }
        Some(Commands::Config) => {
            println!("unibudget Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Default user:    {}", settings.default_user);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("unibudget - Budget tracking with a spending rubric");
            println!();
            println!("Run 'unibudget --help' for usage information.");
            println!("Run 'unibudget init' to get started.");
        }
    }

    Ok(())
}
