//! Deterministic, pure logic over habit collections.
//!
//! Core modules must be free of I/O side effects. Ids and timestamps are
//! passed in by the caller so outputs are reproducible in tests.

pub mod invariants;
pub mod ops;
