//! Roster CLI library
//!
//! Subcommands and report rendering, kept out of `main.rs` so they can be tested.

pub mod commands;
pub mod report;
