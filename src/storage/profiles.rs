//! Financial profile repository for JSON storage
//!
//! Manages loading and saving profiles to profiles.json.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgetError;
use crate::models::{FinancialProfile, ProfileId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable profile data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ProfileData {
    pub profiles: Vec<FinancialProfile>,
}

/// Repository for financial profile persistence
pub struct ProfileRepository {
    path: PathBuf,
    profiles: RwLock<HashMap<ProfileId, FinancialProfile>>,
}

impl ProfileRepository {
    /// Create a new profile repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            profiles: RwLock::new(HashMap::new()),
        }
    }

    /// Load profiles from disk
    pub fn load(&self) -> Result<(), BudgetError> {
        let file_data: ProfileData = read_json(&self.path)?;

        let mut profiles = self
            .profiles
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        profiles.clear();
        for profile in file_data.profiles {
            profiles.insert(profile.id, profile);
        }

        Ok(())
    }

    /// Save profiles to disk
    pub fn save(&self) -> Result<(), BudgetError> {
        let profiles = self
            .profiles
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = profiles.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        write_json_atomic(&self.path, &ProfileData { profiles: list })
    }

    /// Get a profile by ID
    pub fn get(&self, id: ProfileId) -> Result<Option<FinancialProfile>, BudgetError> {
        let profiles = self
            .profiles
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(profiles.get(&id).cloned())
    }

    /// Get the active profile for a user, if one exists
    pub fn get_active_for_user(
        &self,
        user_id: &str,
    ) -> Result<Option<FinancialProfile>, BudgetError> {
        let profiles = self
            .profiles
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(profiles
            .values()
            .find(|p| p.is_active && p.user_id == user_id)
            .cloned())
    }

    /// Get all profiles for a user, active or not, newest first
    pub fn get_all_for_user(&self, user_id: &str) -> Result<Vec<FinancialProfile>, BudgetError> {
        let profiles = self
            .profiles
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = profiles
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    /// Insert or update a profile
    pub fn upsert(&self, profile: FinancialProfile) -> Result<(), BudgetError> {
        let mut profiles = self
            .profiles
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        profiles.insert(profile.id, profile);
        Ok(())
    }

    /// Count profiles
    pub fn count(&self) -> Result<usize, BudgetError> {
        let profiles = self
            .profiles
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(profiles.len())
    }
}
