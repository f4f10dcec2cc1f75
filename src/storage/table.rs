//! In-memory table backed by one JSON file
//!
//! Rows keep insertion order, which is the order listings return them in.
//! Names are unique per table, compared case-insensitively.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::LedgerError;
use crate::models::{name_key, names_match};

use super::file_io::{read_json, write_json_atomic};

/// A record type stored in a [`Table`]
pub trait Row: Clone + Serialize + DeserializeOwned {
    /// Table name used in error messages
    const TABLE: &'static str;

    /// Name under the table's unique constraint, if it has one
    fn unique_name(&self) -> Option<&str>;

    /// Field-level checks applied to rows read from disk or inserted
    fn check(&self) -> Result<(), String>;
}

pub struct Table<T> {
    path: PathBuf,
    rows: RwLock<Vec<T>>,
}

impl<T: Row> Table<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            rows: RwLock::new(Vec::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory rows with the file's contents
    ///
    /// Every row is checked; one malformed row fails the whole load.
    pub fn load(&self) -> Result<(), LedgerError> {
        let rows: Vec<T> = read_json(&self.path)?;
        check_rows(&rows)?;

        *self.write()? = rows;
        Ok(())
    }

    pub fn save(&self) -> Result<(), LedgerError> {
        let rows = self.read()?;
        write_json_atomic(&self.path, rows.as_slice())
    }

    /// Write a given set of rows to this table's file
    pub fn save_rows(&self, rows: &[T]) -> Result<(), LedgerError> {
        write_json_atomic(&self.path, rows)
    }

    pub fn snapshot(&self) -> Result<Vec<T>, LedgerError> {
        Ok(self.read()?.clone())
    }

    pub fn restore(&self, rows: Vec<T>) -> Result<(), LedgerError> {
        *self.write()? = rows;
        Ok(())
    }

    pub fn all(&self) -> Result<Vec<T>, LedgerError> {
        self.snapshot()
    }

    pub fn len(&self) -> Result<usize, LedgerError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.read()?.is_empty())
    }

    /// Find a row by its unique name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Result<Option<T>, LedgerError> {
        let rows = self.read()?;
        Ok(rows.iter().find(|row| name_matches(*row, name)).cloned())
    }

    /// Append a row, enforcing field checks and the unique name constraint
    pub fn insert(&self, row: T) -> Result<(), LedgerError> {
        row.check().map_err(|reason| {
            LedgerError::Persistence(format!("Rejected row for {} table: {}", T::TABLE, reason))
        })?;

        let mut rows = self.write()?;
        if let Some(name) = row.unique_name() {
            if rows.iter().any(|existing| name_matches(existing, name)) {
                return Err(LedgerError::Persistence(format!(
                    "Unique constraint violated in {} table: '{}'",
                    T::TABLE,
                    name
                )));
            }
        }

        rows.push(row);
        Ok(())
    }

    /// Apply `update` to the row with the given name
    pub fn update_by_name<F>(&self, name: &str, update: F) -> Result<(), LedgerError>
    where
        F: FnOnce(&mut T),
    {
        let mut rows = self.write()?;
        let row = rows
            .iter_mut()
            .find(|row| name_matches(&**row, name))
            .ok_or_else(|| {
                LedgerError::Persistence(format!(
                    "No row named '{}' in {} table",
                    name,
                    T::TABLE
                ))
            })?;

        update(row);
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<T>>, LedgerError> {
        self.rows.read().map_err(|e| {
            LedgerError::Persistence(format!("Failed to acquire read lock: {}", e))
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>, LedgerError> {
        self.rows.write().map_err(|e| {
            LedgerError::Persistence(format!("Failed to acquire write lock: {}", e))
        })
    }
}

fn name_matches<T: Row>(row: &T, name: &str) -> bool {
    row.unique_name()
        .is_some_and(|existing| names_match(existing, name))
}

fn check_rows<T: Row>(rows: &[T]) -> Result<(), LedgerError> {
    let mut seen = HashSet::new();

    for (index, row) in rows.iter().enumerate() {
        row.check().map_err(|reason| {
            LedgerError::Persistence(format!(
                "Malformed row {} in {} table: {}",
                index + 1,
                T::TABLE,
                reason
            ))
        })?;

        if let Some(name) = row.unique_name() {
            if !seen.insert(name_key(name)) {
                return Err(LedgerError::Persistence(format!(
                    "Duplicate name '{}' in {} table",
                    name,
                    T::TABLE
                )));
            }
        }
    }

    Ok(())
}
