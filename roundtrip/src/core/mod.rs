//! Deterministic, pure logic shared by the round-trip helpers.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod policy;
pub mod types;
pub mod verify;
