//! Profile persistence.
//!
//! The core never touches storage itself; callers load a profile at session
//! start, run ledger operations against it and save it back after every
//! mutation (last writer wins — only one session per profile is supported).
//! Both stores key records as `user_{email}`, the scheme the original web
//! app used in browser storage.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::Result;
use crate::models::Profile;

/// Key-value persistence for one serialized profile per user.
pub trait ProfileStore {
    /// Load and validate the profile for `email`, if one exists.
    fn load(&self, email: &str) -> Result<Option<Profile>>;

    /// Persist the profile under `email`, replacing any previous record.
    fn save(&mut self, email: &str, profile: &Profile) -> Result<()>;
}

fn record_key(email: &str) -> String {
    format!("user_{}", email.to_lowercase())
}

/// In-memory store of serialized JSON records.
///
/// Mirrors browser local storage closely enough to stand in for it in tests:
/// records pass through a full serialize/deserialize cycle on every access.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self, email: &str) -> Result<Option<Profile>> {
        match self.records.get(&record_key(email)) {
            Some(raw) => {
                let profile: Profile = serde_json::from_str(raw)?;
                profile.validate()?;
                Ok(Some(profile))
            }
            None => Ok(None),
        }
    }

    fn save(&mut self, email: &str, profile: &Profile) -> Result<()> {
        let raw = serde_json::to_string(profile)?;
        self.records.insert(record_key(email), raw);
        Ok(())
    }
}

/// Store keeping one `user_{email}.json` file per profile in a directory.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn record_path(&self, email: &str) -> PathBuf {
        self.dir.join(format!("{}.json", record_key(email)))
    }
}

impl ProfileStore for JsonFileStore {
    fn load(&self, email: &str) -> Result<Option<Profile>> {
        let path = self.record_path(email);
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path)?;
        let profile: Profile = serde_json::from_str(&raw)?;
        profile.validate()?;
        Ok(Some(profile))
    }

    fn save(&mut self, email: &str, profile: &Profile) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let raw = serde_json::to_string_pretty(profile)?;
        std::fs::write(self.record_path(email), raw)?;
        tracing::debug!(user = %profile.email, "profile saved");
        Ok(())
    }
}
