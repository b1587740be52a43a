//! CSV-backed habit storage.
//!
//! The whole collection lives in one file with a fixed header row. Every
//! mutation reads the full file and rewrites it; there is no locking, so two
//! concurrent read-modify-write cycles can lose one update.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use serde::Deserialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::StorageError;
use crate::habit::{CSV_HEADER, Habit};

/// Read-all / write-all access to the habit collection.
pub trait HabitStore: Send + Sync {
    /// Make sure the backing storage exists. Idempotent.
    fn ensure(&self) -> Result<(), StorageError>;

    /// Load every habit in stored order.
    fn read_all(&self) -> Result<Vec<Habit>, StorageError>;

    /// Replace the stored collection with `habits`, in the given order.
    fn write_all(&self, habits: &[Habit]) -> Result<(), StorageError>;
}

/// Habit store backed by a single CSV file.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, action: &'static str, source: std::io::Error) -> StorageError {
        StorageError::Io {
            action,
            path: self.path.clone(),
            source,
        }
    }
}

impl HabitStore for CsvStore {
    fn ensure(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            return Ok(());
        }
        debug!(path = %self.path.display(), "creating habit store");
        self.write_all(&[])
    }

    fn read_all(&self) -> Result<Vec<Habit>, StorageError> {
        self.ensure()?;
        let contents = fs::read_to_string(&self.path).map_err(|err| self.io_error("read", err))?;
        let habits = decode(&self.path, &contents)?;
        debug!(path = %self.path.display(), count = habits.len(), "habits loaded");
        Ok(habits)
    }

    fn write_all(&self, habits: &[Habit]) -> Result<(), StorageError> {
        debug!(path = %self.path.display(), count = habits.len(), "writing habits");
        let buf = encode(&self.path, habits)?;
        write_atomic(&self.path, &buf).map_err(|(action, err)| self.io_error(action, err))
    }
}

/// One CSV row as stored. Missing columns fall back to empty values.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct HabitRow {
    id: String,
    title: String,
    description: String,
    frequency: String,
    streak: String,
    last_completed: String,
    created_at: String,
    updated_at: String,
}

impl HabitRow {
    fn into_habit(self) -> Result<Habit, String> {
        let streak = match self.streak.trim() {
            "" => 0,
            raw => raw
                .parse::<i64>()
                .map_err(|_| format!("streak '{}' is not an integer", raw))?,
        };
        Ok(Habit {
            id: self.id,
            title: self.title,
            description: self.description,
            frequency: self.frequency,
            streak,
            last_completed: self.last_completed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn decode(path: &Path, contents: &str) -> Result<Vec<Habit>, StorageError> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(contents.as_bytes());
    let mut habits = Vec::new();
    for (idx, result) in reader.deserialize::<HabitRow>().enumerate() {
        let row = result.map_err(|source| StorageError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let habit = row
            .into_habit()
            .map_err(|message| StorageError::Malformed {
                path: path.to_path_buf(),
                row: idx as u64 + 1,
                message,
            })?;
        habits.push(habit);
    }
    Ok(habits)
}

fn encode(path: &Path, habits: &[Habit]) -> Result<Vec<u8>, StorageError> {
    let encode_err = |source: csv::Error| StorageError::Encode {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER).map_err(encode_err)?;
    for habit in habits {
        writer.serialize(habit).map_err(encode_err)?;
    }
    writer.into_inner().map_err(|err| StorageError::Io {
        action: "flush",
        path: path.to_path_buf(),
        source: err.into_error(),
    })
}

/// Write via temp file + rename so readers never see a half-written table.
///
/// Each call gets its own uniquely named temp file in the target directory,
/// so concurrent writers only race on the final rename (last one wins).
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), (&'static str, std::io::Error)> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(|err| ("create directory for", err))?;
    let mut tmp = NamedTempFile::new_in(parent).map_err(|err| ("create temp file for", err))?;
    tmp.write_all(contents).map_err(|err| ("write temp file for", err))?;
    tmp.persist(path).map_err(|err| ("replace", err.error))?;
    Ok(())
}
