//! Command implementations for the beepsheet CLI.

pub mod generate;
pub mod json_output;
pub mod validate;
