//! # Roster Shared
//!
//! Error and configuration types used by the outer Roster crates.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
