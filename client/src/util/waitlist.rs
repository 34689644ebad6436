//! Local waitlist ledger persisted as a JSON array.
//!
//! DESIGN
//! ======
//! The spreadsheet endpoint is write-only (no-cors), so the page keeps its
//! own record of every signup. Entries are appended, de-duplicated by exact
//! email match, and never removed by the page. `synced` stays `false` because
//! the page can never confirm server acceptance.
//!
//! ERROR HANDLING
//! ==============
//! Corrupt stored JSON reads as an empty list. Write failures are returned to
//! the caller, which logs them; the user flow never blocks on storage.

#[cfg(test)]
#[path = "waitlist_test.rs"]
mod waitlist_test;

use serde::{Deserialize, Serialize};

use super::storage::{KeyValueStore, StorageError, load_json, save_json};

/// One locally recorded signup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub email: String,
    pub timestamp: String,
    pub source: String,
    /// Older page versions did not write this field.
    #[serde(default)]
    pub synced: bool,
}

impl WaitlistEntry {
    #[must_use]
    pub fn unsynced(email: &str, timestamp: String, source: &str) -> Self {
        Self {
            email: email.to_owned(),
            timestamp,
            source: source.to_owned(),
            synced: false,
        }
    }
}

/// Waitlist entries stored under one key of a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct WaitlistStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> WaitlistStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn load(&self) -> Vec<WaitlistEntry> {
        load_json(&self.store, &self.key).unwrap_or_default()
    }

    #[must_use]
    pub fn contains(&self, email: &str) -> bool {
        self.load().iter().any(|entry| entry.email == email)
    }

    /// Append `entry` unless its email is already present.
    ///
    /// Returns `Ok(true)` when a new entry was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn record(&self, entry: WaitlistEntry) -> Result<bool, StorageError> {
        let mut entries = self.load();
        if entries.iter().any(|existing| existing.email == entry.email) {
            return Ok(false);
        }
        entries.push(entry);
        save_json(&self.store, &self.key, &entries)?;
        Ok(true)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.load().len()
    }

    /// Snapshot of every entry, e.g. for a manual export.
    #[must_use]
    pub fn export(&self) -> Vec<WaitlistEntry> {
        self.load()
    }

    /// Entries not yet confirmed by the remote sheet.
    #[must_use]
    pub fn unsynced(&self) -> Vec<WaitlistEntry> {
        self.load().into_iter().filter(|entry| !entry.synced).collect()
    }

    /// Fold entries stored under `legacy_key` into this list and drop the
    /// legacy key. Returns how many entries were added.
    ///
    /// # Errors
    ///
    /// Returns an error if either write fails; the legacy key is only removed
    /// after the merged list is saved.
    pub fn migrate_legacy(&self, legacy_key: &str) -> Result<usize, StorageError> {
        if legacy_key == self.key || self.store.get(legacy_key).is_none() {
            return Ok(0);
        }
        let legacy: Vec<WaitlistEntry> = load_json(&self.store, legacy_key).unwrap_or_default();
        let mut entries = self.load();
        let mut added = 0;
        for mut entry in legacy {
            if entries.iter().any(|existing| existing.email == entry.email) {
                continue;
            }
            entry.synced = false;
            entries.push(entry);
            added += 1;
        }
        if added > 0 {
            save_json(&self.store, &self.key, &entries)?;
        }
        self.store.remove(legacy_key)?;
        Ok(added)
    }
}
