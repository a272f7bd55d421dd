//! Database module - SQLite key-value storage for profile and progress

use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, params};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::profile::UserProfile;
use crate::progress::Progress;

pub const PROFILE_KEY: &str = "fitpath-profile";
pub const PROGRESS_KEY: &str = "fitpath-progress";

/// Database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS records (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM records WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn put_raw(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO records (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Load a JSON record. A record that no longer parses counts as absent.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.get_raw(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("Ignoring unreadable record {}: {}", key, e);
                Ok(None)
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.put_raw(key, &raw)?;
        debug!("Saved record {}", key);
        Ok(())
    }

    pub fn load_profile(&self) -> Result<Option<UserProfile>> {
        self.load(PROFILE_KEY)
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        self.save(PROFILE_KEY, profile)
    }

    pub fn load_progress(&self) -> Result<Option<Progress>> {
        Ok(self.load::<Progress>(PROGRESS_KEY)?.map(|mut p| {
            p.normalize();
            p
        }))
    }

    pub fn save_progress(&self, progress: &Progress) -> Result<()> {
        self.save(PROGRESS_KEY, progress)
    }

    /// Remove everything (profile and progress)
    pub fn clear(&self) -> Result<()> {
        self.conn.execute("DELETE FROM records", [])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Equipment, FitnessLevel, Goal, Limitation};

    fn sample_profile() -> UserProfile {
        UserProfile::new(FitnessLevel::Beginner, Goal::WeightLoss, Equipment::Dumbbells, 4)
            .with_limitations([Limitation::Back])
    }

    #[test]
    fn test_empty_database_has_no_records() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.load_profile().unwrap().is_none());
        assert!(db.load_progress().unwrap().is_none());
    }

    #[test]
    fn test_profile_roundtrip() {
        let db = Database::open_in_memory().unwrap();
        let profile = sample_profile();
        db.save_profile(&profile).unwrap();
        assert_eq!(db.load_profile().unwrap(), Some(profile));
    }

    #[test]
    fn test_save_overwrites_previous_record() {
        let db = Database::open_in_memory().unwrap();
        let mut progress = Progress::new();
        db.save_progress(&progress).unwrap();
        progress.toggle_day(2);
        progress.set_current_day(2);
        db.save_progress(&progress).unwrap();
        assert_eq!(db.load_progress().unwrap(), Some(progress));
    }

    #[test]
    fn test_progress_normalized_on_load() {
        let db = Database::open_in_memory().unwrap();
        db.put_raw(PROGRESS_KEY, r#"{"currentDay":3,"completedDays":[5,5,1,12]}"#).unwrap();
        let progress = db.load_progress().unwrap().unwrap();
        assert_eq!(progress.current_day, 3);
        assert_eq!(progress.completed_days.into_iter().collect::<Vec<_>>(), vec![1, 5]);
    }

    #[test]
    fn test_legacy_profile_record_loads() {
        let db = Database::open_in_memory().unwrap();
        db.put_raw(
            PROFILE_KEY,
            r#"{"fitnessLevel":"advanced","goal":"strength","equipment":"both","weeklyDays":7,"limitations":["Knee issues"]}"#,
        )
        .unwrap();
        let profile = db.load_profile().unwrap().unwrap();
        assert!(profile.has_limitation(Limitation::Knee));
    }

    #[test]
    fn test_unreadable_record_treated_as_absent() {
        let db = Database::open_in_memory().unwrap();
        db.put_raw(PROFILE_KEY, "{not json").unwrap();
        assert!(db.load_profile().unwrap().is_none());

        db.put_raw(PROFILE_KEY, r#"{"fitnessLevel":"expert"}"#).unwrap();
        assert!(db.load_profile().unwrap().is_none());
    }

    #[test]
    fn test_clear_removes_everything() {
        let db = Database::open_in_memory().unwrap();
        db.save_profile(&sample_profile()).unwrap();
        db.save_progress(&Progress::new()).unwrap();
        db.clear().unwrap();
        assert!(db.load_profile().unwrap().is_none());
        assert!(db.load_progress().unwrap().is_none());
    }
}
