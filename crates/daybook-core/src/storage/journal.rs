//! The encrypted, date-ordered journal store.
//!
//! A [`Journal`] is bound to one file and one password for its whole life.
//! Entries live in memory as encrypted blobs keyed by date; plaintext only
//! exists transiently inside [`Journal::get_entry`]. Nothing reaches the disk
//! until [`Journal::save`].

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::ops::Bound::{Excluded, Unbounded};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use secrecy::{ExposeSecret, SecretString};

use crate::crypto::{decrypt, encrypt, EncodedBlob};
use crate::error::{DaybookError, Result};
use crate::storage::date_key::{ensure_key_range, format_date_key, parse_date_key};
use crate::storage::format::{EntryFormat, PropertiesFormat};

/// An open journal: file path, session password and encrypted entries.
pub struct Journal {
    path: PathBuf,
    password: SecretString,
    entries: BTreeMap<NaiveDate, EncodedBlob>,
    format: Box<dyn EntryFormat>,
}

impl Journal {
    /// Create a new, empty journal at `path`.
    ///
    /// An existing file at `path` is replaced; the caller is expected to have
    /// confirmed that already.
    ///
    /// # Errors
    ///
    /// - `DaybookError::ReadOnly` if a read-only file already exists at `path`
    /// - `DaybookError::Io` if the file cannot be removed or created
    pub fn create(path: &Path, password: &str) -> Result<Self> {
        Self::create_with_format(path, password, Box::new(PropertiesFormat::new()))
    }

    /// Like [`Journal::create`], with a custom file format.
    pub fn create_with_format(
        path: &Path,
        password: &str,
        format: Box<dyn EntryFormat>,
    ) -> Result<Self> {
        if path.exists() {
            if fs::metadata(path)?.permissions().readonly() {
                return Err(DaybookError::ReadOnly(path.to_path_buf()));
            }
            fs::remove_file(path)?;
        }
        OpenOptions::new().write(true).create_new(true).open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            password: SecretString::from(password.to_string()),
            entries: BTreeMap::new(),
            format,
        })
    }

    /// Open an existing journal at `path`.
    ///
    /// Every record must have a canonical date key and a Base64 value. The
    /// password is not checked here; call [`Journal::test_password`] next.
    ///
    /// # Errors
    ///
    /// - `DaybookError::JournalNotFound` if `path` does not exist
    /// - `DaybookError::ReadOnly` if the file cannot be written back
    /// - `DaybookError::Io` if the file cannot be read
    /// - `DaybookError::Load` if any record is malformed
    pub fn open(path: &Path, password: &str) -> Result<Self> {
        Self::open_with_format(path, password, Box::new(PropertiesFormat::new()))
    }

    /// Like [`Journal::open`], with a custom file format.
    pub fn open_with_format(
        path: &Path,
        password: &str,
        format: Box<dyn EntryFormat>,
    ) -> Result<Self> {
        if !path.exists() {
            return Err(DaybookError::JournalNotFound(path.to_path_buf()));
        }
        if fs::metadata(path)?.permissions().readonly() {
            return Err(DaybookError::ReadOnly(path.to_path_buf()));
        }

        let bytes = fs::read(path)?;
        let mut entries = BTreeMap::new();
        for (key, value) in format.load(&bytes)? {
            let date = parse_date_key(&key)
                .map_err(|_| DaybookError::Load(format!("invalid date key '{}'", key)))?;
            let blob = EncodedBlob::from_base64(value)
                .map_err(|e| DaybookError::Load(format!("entry {}: {}", key, e)))?;
            entries.insert(date, blob);
        }

        Ok(Self {
            path: path.to_path_buf(),
            password: SecretString::from(password.to_string()),
            entries,
            format,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check the session password against the earliest entry.
    ///
    /// An empty journal accepts any password.
    pub fn test_password(&self) -> bool {
        match self.entries.values().next() {
            Some(blob) => decrypt(blob, self.password.expose_secret()).is_ok(),
            None => true,
        }
    }

    /// Set the text for `date`.
    ///
    /// Blank or whitespace-only text removes the entry instead of storing an
    /// empty one. Only the in-memory map changes; call [`Journal::save`] to
    /// persist.
    ///
    /// # Errors
    ///
    /// - `DaybookError::InvalidArgument` if the year is outside 0..=9999
    /// - `DaybookError::Crypto` if encryption fails
    pub fn add_entry(&mut self, date: NaiveDate, text: &str) -> Result<()> {
        ensure_key_range(date)?;
        if text.trim().is_empty() {
            self.entries.remove(&date);
            return Ok(());
        }
        let blob = encrypt(text, self.password.expose_secret())?;
        self.entries.insert(date, blob);
        Ok(())
    }

    /// Remove the entry for `date`, returning whether there was one.
    pub fn remove_entry(&mut self, date: NaiveDate) -> bool {
        self.entries.remove(&date).is_some()
    }

    /// Decrypt the entry for `date`.
    ///
    /// Returns `Ok(None)` if there is no entry for that date.
    ///
    /// # Errors
    ///
    /// - `DaybookError::DecryptionFailed` if the entry does not authenticate
    ///   under the session password
    /// - `DaybookError::MalformedBlob` if the stored value is too short
    pub fn get_entry(&self, date: NaiveDate) -> Result<Option<String>> {
        self.entries
            .get(&date)
            .map(|blob| decrypt(blob, self.password.expose_secret()))
            .transpose()
    }

    /// All entry dates, ascending.
    pub fn entry_dates(&self) -> impl DoubleEndedIterator<Item = NaiveDate> + ExactSizeIterator + '_ {
        self.entries.keys().copied()
    }

    /// Entry dates within `start..=end`, ascending.
    ///
    /// # Errors
    ///
    /// Returns `DaybookError::InvalidArgument` if `start` is after `end`.
    pub fn entries_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
        if start > end {
            return Err(DaybookError::InvalidArgument(format!(
                "Range start {} is after end {}",
                start, end
            )));
        }
        Ok(self.entries.range(start..=end).map(|(date, _)| *date).collect())
    }

    pub fn first_entry_date(&self) -> Option<NaiveDate> {
        self.entries.keys().next().copied()
    }

    pub fn last_entry_date(&self) -> Option<NaiveDate> {
        self.entries.keys().next_back().copied()
    }

    /// The earliest entry date strictly after `from`, or `from` itself if
    /// there is none.
    pub fn next_entry_date(&self, from: NaiveDate) -> NaiveDate {
        self.entries
            .range((Excluded(from), Unbounded))
            .next()
            .map(|(date, _)| *date)
            .unwrap_or(from)
    }

    /// The latest entry date strictly before `from`, or `from` itself if
    /// there is none.
    pub fn previous_entry_date(&self, from: NaiveDate) -> NaiveDate {
        self.entries
            .range(..from)
            .next_back()
            .map(|(date, _)| *date)
            .unwrap_or(from)
    }

    pub fn has_date(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    /// Write every entry to the backing file, replacing its content.
    ///
    /// The file is written to a temp sibling and renamed into place, so a
    /// failed save leaves the previous content intact.
    ///
    /// # Errors
    ///
    /// Returns `DaybookError::Io` on any write failure.
    pub fn save(&self) -> Result<()> {
        let raw: BTreeMap<String, String> = self
            .entries
            .iter()
            .map(|(date, blob)| (format_date_key(*date), blob.as_str().to_string()))
            .collect();
        let bytes = self.format.dump(&raw)?;
        crate::fs::write_atomic(&self.path, &bytes)?;
        Ok(())
    }
}

impl std::fmt::Debug for Journal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Journal")
            .field("path", &self.path)
            .field("entries", &self.entries.len())
            .field("password", &"[REDACTED]")
            .finish()
    }
}
