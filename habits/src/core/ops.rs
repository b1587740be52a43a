//! Single-record mutations applied to an in-memory collection.

use crate::error::{HabitError, HabitResult};
use crate::habit::{DEFAULT_FREQUENCY, Habit, HabitPatch, NewHabit};

/// Build a new habit from client input.
///
/// Fails with `HabitError::Validation` when the title is missing or blank.
pub fn build_habit(input: NewHabit, id: String, now: &str) -> HabitResult<Habit> {
    let title = match input.title {
        Some(title) if !title.trim().is_empty() => title,
        _ => return Err(HabitError::Validation("title is required".to_string())),
    };
    Ok(Habit {
        id,
        title,
        description: input.description.unwrap_or_default(),
        frequency: input
            .frequency
            .unwrap_or_else(|| DEFAULT_FREQUENCY.to_string()),
        streak: 0,
        last_completed: String::new(),
        created_at: now.to_string(),
        updated_at: now.to_string(),
    })
}

/// Merge the supplied fields into `habit` and refresh `updated_at`.
///
/// `updated_at` never moves backwards, even if the clock does.
pub fn apply_patch(habit: &mut Habit, patch: HabitPatch, now: &str) {
    if let Some(title) = patch.title {
        habit.title = title;
    }
    if let Some(description) = patch.description {
        habit.description = description;
    }
    if let Some(frequency) = patch.frequency {
        habit.frequency = frequency;
    }
    if now > habit.updated_at.as_str() {
        habit.updated_at = now.to_string();
    }
}

/// Index of the habit with `id`, in collection order.
pub fn position_of(habits: &[Habit], id: &str) -> Option<usize> {
    habits.iter().position(|habit| habit.id == id)
}

/// Remove and return the habit with `id`.
pub fn remove_by_id(habits: &mut Vec<Habit>, id: &str) -> HabitResult<Habit> {
    let idx = position_of(habits, id).ok_or_else(|| HabitError::NotFound(id.to_string()))?;
    Ok(habits.remove(idx))
}
