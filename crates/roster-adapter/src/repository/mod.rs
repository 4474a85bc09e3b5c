//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from roster-domain.

pub mod in_memory;
