//! JSON-file-backed availability store with a username registry.
//!
//! The whole store is one serde document: a `name → identity` registry plus
//! the weekly patterns and date overrides keyed by identity. Loading and
//! saving the full document per invocation keeps the weekly full-replace
//! atomic from the point of view of any later reader.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use freeslot_engine::{
    AvailabilityStore, DateOverrides, EngineError, IdentityId, Slot, WeeklyPattern,
};

/// On-disk store document.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FileStore {
    /// Username registry. Availability commands address users by name and
    /// fail with not-found for names that were never added.
    #[serde(default)]
    users: BTreeMap<String, IdentityId>,
    #[serde(default)]
    weekly: BTreeMap<IdentityId, WeeklyPattern>,
    #[serde(default)]
    overrides: BTreeMap<IdentityId, DateOverrides>,
}

impl FileStore {
    /// Load the store from `path`, or start empty when the file is missing.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read store file: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse store file: {}", path.display()))
    }

    /// Persist the store to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)
            .with_context(|| format!("Failed to write store file: {}", path.display()))
    }

    /// Register a new user under a fresh identity.
    pub fn add_user(&mut self, name: &str) -> anyhow::Result<IdentityId> {
        if self.users.contains_key(name) {
            anyhow::bail!("user already exists: {}", name);
        }
        let identity = IdentityId::generate();
        self.users.insert(name.to_string(), identity);
        Ok(identity)
    }

    /// Resolve a username to its identity.
    pub fn lookup(&self, name: &str) -> Result<IdentityId, EngineError> {
        self.users
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::IdentityNotFound(name.to_string()))
    }

    pub fn users(&self) -> &BTreeMap<String, IdentityId> {
        &self.users
    }
}

impl AvailabilityStore for FileStore {
    fn load_weekly_pattern(&self, identity: IdentityId) -> freeslot_engine::Result<WeeklyPattern> {
        Ok(self.weekly.get(&identity).cloned().unwrap_or_default())
    }

    fn load_date_overrides(
        &self,
        identity: IdentityId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> freeslot_engine::Result<DateOverrides> {
        let Some(overrides) = self.overrides.get(&identity) else {
            return Ok(DateOverrides::new());
        };
        Ok(overrides
            .range(from..=to)
            .map(|(date, slots)| (*date, slots.clone()))
            .collect())
    }

    fn replace_weekly_pattern(
        &mut self,
        identity: IdentityId,
        pattern: WeeklyPattern,
    ) -> freeslot_engine::Result<()> {
        self.weekly.insert(identity, pattern);
        Ok(())
    }

    fn upsert_date_override(
        &mut self,
        identity: IdentityId,
        date: NaiveDate,
        slots: Vec<Slot>,
    ) -> freeslot_engine::Result<()> {
        self.overrides.entry(identity).or_default().insert(date, slots);
        Ok(())
    }

    fn delete_weekly_pattern(&mut self, identity: IdentityId) -> freeslot_engine::Result<()> {
        self.weekly.remove(&identity);
        Ok(())
    }

    fn delete_date_overrides(
        &mut self,
        identity: IdentityId,
        date: Option<NaiveDate>,
    ) -> freeslot_engine::Result<()> {
        match date {
            Some(date) => {
                if let Some(overrides) = self.overrides.get_mut(&identity) {
                    overrides.remove(&date);
                }
            }
            None => {
                self.overrides.remove(&identity);
            }
        }
        Ok(())
    }
}
