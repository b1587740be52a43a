//! Habit operations: one full read-modify-write against the store each.
//!
//! Ids and timestamps are generated here; the mutation itself is delegated
//! to [`crate::core::ops`].

use chrono::{SecondsFormat, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::ops::{apply_patch, build_habit, position_of, remove_by_id};
use crate::error::{HabitError, HabitResult};
use crate::habit::{Habit, HabitPatch, NewHabit};
use crate::io::store::HabitStore;

/// Current time as RFC 3339 UTC with millisecond precision.
///
/// The fixed width keeps lexicographic and chronological order identical.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Return the full collection in stored order.
pub fn list_habits(store: &dyn HabitStore) -> HabitResult<Vec<Habit>> {
    Ok(store.read_all()?)
}

/// Validate `input`, append a new habit, and persist.
pub fn create_habit(store: &dyn HabitStore, input: NewHabit) -> HabitResult<Habit> {
    let habit = build_habit(input, new_id(), &now_timestamp())?;
    let mut habits = store.read_all()?;
    habits.push(habit.clone());
    store.write_all(&habits)?;
    info!(id = %habit.id, title = %habit.title, "habit created");
    Ok(habit)
}

/// Merge `patch` into the habit with `id` and persist.
pub fn update_habit(store: &dyn HabitStore, id: &str, patch: HabitPatch) -> HabitResult<Habit> {
    let mut habits = store.read_all()?;
    let idx = position_of(&habits, id).ok_or_else(|| HabitError::NotFound(id.to_string()))?;
    if patch.is_empty() {
        debug!(id, "update carries no fields, refreshing updatedAt only");
    }
    apply_patch(&mut habits[idx], patch, &now_timestamp());
    let updated = habits[idx].clone();
    store.write_all(&habits)?;
    info!(id, "habit updated");
    Ok(updated)
}

/// Remove the habit with `id`, persist the rest, and return the removed record.
pub fn delete_habit(store: &dyn HabitStore, id: &str) -> HabitResult<Habit> {
    let mut habits = store.read_all()?;
    let removed = remove_by_id(&mut habits, id)?;
    store.write_all(&habits)?;
    info!(id, remaining = habits.len(), "habit deleted");
    Ok(removed)
}
