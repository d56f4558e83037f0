//! First-run storage initialization

use crate::config::paths::AppPaths;
use crate::error::BudgetError;

use super::file_io::write_json_atomic;
use super::expenses::ExpenseData;
use super::profiles::ProfileData;

/// Create the data directory and empty data files
///
/// Safe to call repeatedly: existing data files are left alone.
pub fn initialize_storage(paths: &AppPaths) -> Result<(), BudgetError> {
    paths.ensure_directories()?;

    if !paths.profiles_file().exists() {
        write_json_atomic(paths.profiles_file(), &ProfileData::default())?;
    }

    if !paths.expenses_file().exists() {
        write_json_atomic(paths.expenses_file(), &ExpenseData::default())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinancialProfile, IncomeFrequency, Money};
    use crate::storage::ProfileRepository;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        assert!(paths.profiles_file().exists());
        assert!(paths.expenses_file().exists());
    }

    #[test]
    fn test_initialize_preserves_existing_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        let repo = ProfileRepository::new(paths.profiles_file());
        repo.load().unwrap();
        repo.upsert(FinancialProfile::new(
            "sam",
            Money::from_dollars(2600),
            IncomeFrequency::Monthly,
        ))
        .unwrap();
        repo.save().unwrap();

        // Second init must not clobber the profile
        initialize_storage(&paths).unwrap();

        let repo2 = ProfileRepository::new(paths.profiles_file());
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 1);
    }
}
