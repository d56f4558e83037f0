//! Storage layer for unibudget
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The services layer consumes this as a plain synchronous
//! accessor; nothing here blocks on anything but local file I/O.

pub mod expenses;
pub mod file_io;
pub mod init;
pub mod profiles;

pub use expenses::{parse_month, ExpenseRepository};
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use profiles::ProfileRepository;

use crate::config::paths::AppPaths;
use crate::error::BudgetError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: AppPaths,
    pub profiles: ProfileRepository,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: AppPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        Ok(Self {
            profiles: ProfileRepository::new(paths.profiles_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), BudgetError> {
        self.profiles.load()?;
        self.expenses.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), BudgetError> {
        self.profiles.save()?;
        self.expenses.save()?;
        Ok(())
    }
}
