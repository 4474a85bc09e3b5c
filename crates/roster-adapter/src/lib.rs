//! # Roster Adapter Layer
//!
//! Implementations of the ports declared in `roster-domain`.
//!
//! ## Structure
//!
//! - `repository/` - Employee storage implementations

pub mod repository;
