//! Test-only helpers: habit fixtures and in-memory stores.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::StorageError;
use crate::habit::Habit;
use crate::io::store::HabitStore;

/// Create a deterministic habit with `created_at == updated_at == ts`.
pub fn habit(id: &str, title: &str, ts: &str) -> Habit {
    Habit {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        frequency: "daily".to_string(),
        streak: 0,
        last_completed: String::new(),
        created_at: ts.to_string(),
        updated_at: ts.to_string(),
    }
}

/// In-memory store that counts writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    habits: Mutex<Vec<Habit>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_habits(habits: Vec<Habit>) -> Self {
        Self {
            habits: Mutex::new(habits),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of successful `write_all` calls.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current contents, bypassing the store interface.
    pub fn snapshot(&self) -> Vec<Habit> {
        self.habits.lock().map(|h| h.clone()).unwrap_or_default()
    }
}

impl HabitStore for MemoryStore {
    fn ensure(&self) -> Result<(), StorageError> {
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Habit>, StorageError> {
        let habits = self
            .habits
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store poisoned".to_string()))?;
        Ok(habits.clone())
    }

    fn write_all(&self, habits: &[Habit]) -> Result<(), StorageError> {
        let mut stored = self
            .habits
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store poisoned".to_string()))?;
        *stored = habits.to_vec();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Store whose every call fails.
#[derive(Debug, Default)]
pub struct FailingStore;

impl HabitStore for FailingStore {
    fn ensure(&self) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disk on fire".to_string()))
    }

    fn read_all(&self) -> Result<Vec<Habit>, StorageError> {
        Err(StorageError::Unavailable("disk on fire".to_string()))
    }

    fn write_all(&self, _habits: &[Habit]) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disk on fire".to_string()))
    }
}
