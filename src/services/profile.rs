//! Financial profile service
//!
//! Business logic for income configuration: creating the first profile,
//! editing income, and deactivating.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{FinancialProfile, IncomeFrequency, Money};
use crate::storage::Storage;

/// Service for financial profile management
pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    /// Create a new profile service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set a user's income, creating a profile on first use
    pub fn set_income(
        &self,
        user_id: &str,
        income: Money,
        frequency: IncomeFrequency,
    ) -> BudgetResult<FinancialProfile> {
        let profile = match self.storage.profiles.get_active_for_user(user_id)? {
            Some(mut existing) => {
                existing.set_income(income, frequency);
                existing
            }
            None => FinancialProfile::new(user_id, income, frequency),
        };

        profile
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        self.storage.profiles.upsert(profile.clone())?;
        self.storage.profiles.save()?;

        Ok(profile)
    }

    /// Get the active profile for a user
    pub fn get_active(&self, user_id: &str) -> BudgetResult<Option<FinancialProfile>> {
        self.storage.profiles.get_active_for_user(user_id)
    }

    /// Get the active profile, erroring when there is none
    pub fn require_active(&self, user_id: &str) -> BudgetResult<FinancialProfile> {
        self.get_active(user_id)?
            .ok_or_else(|| BudgetError::profile_not_found(user_id))
    }

    /// Deactivate the active profile for a user
    ///
    /// The profile is kept for history; lookups stop returning it.
    pub fn deactivate(&self, user_id: &str) -> BudgetResult<FinancialProfile> {
        let mut profile = self.require_active(user_id)?;
        profile.deactivate();

        self.storage.profiles.upsert(profile.clone())?;
        self.storage.profiles.save()?;

        Ok(profile)
    }
}
