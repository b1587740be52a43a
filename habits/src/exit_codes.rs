//! Stable exit codes for the `habits` CLI.

/// Command succeeded.
pub const OK: i32 = 0;
/// Storage could not be read, or the collection violates an invariant.
pub const INVALID: i32 = 1;
