//! Collection invariants checked by `habits validate`.

use std::collections::HashSet;

use crate::habit::Habit;

/// Check invariants of a loaded collection:
/// - No duplicate ids
/// - Non-empty title
/// - `createdAt <= updatedAt`
pub fn validate_invariants(habits: &[Habit]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (idx, habit) in habits.iter().enumerate() {
        let row = idx + 1;
        if habit.id.is_empty() {
            errors.push(format!("row {}: id must not be empty", row));
        } else if !seen.insert(habit.id.as_str()) {
            errors.push(format!("row {}: duplicate id '{}'", row, habit.id));
        }

        if habit.title.trim().is_empty() {
            errors.push(format!("row {} ({}): title must not be empty", row, habit.id));
        }

        if habit.created_at > habit.updated_at {
            errors.push(format!(
                "row {} ({}): createdAt {} is after updatedAt {}",
                row, habit.id, habit.created_at, habit.updated_at
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::habit;

    #[test]
    fn clean_collection_has_no_errors() {
        let habits = vec![
            habit("a", "A", "2024-01-01T00:00:00.000Z"),
            habit("b", "B", "2024-01-02T00:00:00.000Z"),
        ];
        assert!(validate_invariants(&habits).is_empty());
    }

    #[test]
    fn reports_every_violation() {
        let mut late = habit("b", " ", "2024-01-02T00:00:00.000Z");
        late.updated_at = "2024-01-01T00:00:00.000Z".to_string();
        let habits = vec![
            habit("a", "A", "2024-01-01T00:00:00.000Z"),
            late,
            habit("a", "C", "2024-01-01T00:00:00.000Z"),
        ];

        let errors = validate_invariants(&habits);
        assert!(errors.iter().any(|err| err.contains("duplicate id 'a'")));
        assert!(errors.iter().any(|err| err.contains("title must not be empty")));
        assert!(errors.iter().any(|err| err.contains("is after updatedAt")));
        assert_eq!(errors.len(), 3);
    }
}
