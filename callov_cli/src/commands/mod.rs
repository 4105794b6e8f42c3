//! CLI subcommand implementations.

pub mod actions;
pub mod options;
pub mod run;
pub mod verify;
