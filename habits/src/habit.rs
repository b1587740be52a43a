use serde::{Deserialize, Serialize};

/// Frequency assigned when a create request omits one.
pub const DEFAULT_FREQUENCY: &str = "daily";

/// Column order of the backing CSV file.
pub const CSV_HEADER: [&str; 8] = [
    "id",
    "title",
    "description",
    "frequency",
    "streak",
    "lastCompleted",
    "createdAt",
    "updatedAt",
];

/// A tracked recurring activity.
///
/// `streak` and `last_completed` are carried through storage and the API but
/// no operation changes them after creation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub title: String,
    pub description: String,
    pub frequency: String,
    pub streak: i64,
    pub last_completed: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Client input for creating a habit.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewHabit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub frequency: Option<String>,
}

/// Client input for updating a habit. `None` leaves the field unchanged.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HabitPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub frequency: Option<String>,
}

impl HabitPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.frequency.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn habit_serializes_with_camel_case_fields() {
        let habit = Habit {
            id: "h1".to_string(),
            title: "Read".to_string(),
            description: String::new(),
            frequency: "weekly".to_string(),
            streak: 0,
            last_completed: String::new(),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            updated_at: "2024-01-01T00:00:00.000Z".to_string(),
        };
        let value = serde_json::to_value(&habit).expect("serialize");
        let keys: Vec<&str> = value
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        for column in CSV_HEADER {
            assert!(keys.contains(&column), "missing {column}");
        }
        assert_eq!(value["streak"], 0);
    }

    #[test]
    fn null_patch_fields_deserialize_as_absent() {
        let patch: HabitPatch =
            serde_json::from_str(r#"{"title":null,"description":"2L"}"#).expect("parse");
        assert_eq!(patch.title, None);
        assert_eq!(patch.description.as_deref(), Some("2L"));
        assert!(!patch.is_empty());
        assert!(HabitPatch::default().is_empty());
    }
}
