//! Habit records persisted in a flat CSV file.
//!
//! - **[`core`]**: Pure logic (build, patch, remove, invariants). No I/O.
//! - **[`io`]**: The [`io::HabitStore`] trait and its CSV implementation.
//! - **[`service`]**: List/create/update/delete, each one full
//!   read-modify-write cycle against an injected store.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod habit;
pub mod io;
pub mod logging;
pub mod service;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::{HabitError, HabitResult, StorageError};
pub use habit::{Habit, HabitPatch, NewHabit};
