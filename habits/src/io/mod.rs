//! Side-effecting persistence for the habit collection.

pub mod store;

pub use store::{CsvStore, HabitStore};
