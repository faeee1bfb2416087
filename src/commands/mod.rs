//! Subcommand implementations.

pub mod detect;
pub mod serve;
