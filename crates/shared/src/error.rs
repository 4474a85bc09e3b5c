//! Error types for Roster

use roster_domain::{EmployeeError, RepositoryError};
use thiserror::Error;

/// Error raised when an employee references a department the roster never declared
#[derive(Debug, Error)]
#[error("Employee {employee_id} references unknown department {department_id}. Known departments: {}", join_ids(.known_ids))]
pub struct UnknownDepartmentError {
    pub employee_id: i64,
    pub department_id: i64,
    pub known_ids: Vec<i64>,
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
}

/// General Roster error type
#[derive(Debug, Error)]
pub enum RosterError {
    #[error(transparent)]
    UnknownDepartment(#[from] UnknownDepartmentError),

    #[error(transparent)]
    InvalidEmployee(#[from] EmployeeError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
