//! beepsheet CLI library.
//!
//! Command implementations live here so they can be exercised by tests; the
//! `beepsheet` binary in `main.rs` only parses arguments and dispatches.

pub mod commands;
