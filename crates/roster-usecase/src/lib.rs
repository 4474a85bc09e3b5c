//! # Roster Use Case Layer
//!
//! Application-specific flows.
//! Pulls the roster out of a repository and hands it to the domain queries.

pub mod salary_report;

pub use roster_domain;
pub use salary_report::{SalaryReportUseCase, UseCaseError};
