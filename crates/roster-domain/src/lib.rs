//! # Roster Domain Layer
//!
//! Departments, employees, and the salary queries over them.
//! Pure business logic with zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Department (value), Employee (entity)         ││
//! │  │  repository/- EmployeeRepository trait (no implementations) ││
//! │  │  service/   - DepartmentGroups, SalaryRanking               ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Queries
//!
//! ```text
//! employees ──► DepartmentGroups ──► per-group max ──► BTreeMap<Department, Employee>
//! employees ──► filter(dept == X) ──► max ──────────► Option<Employee>
//! ```

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    department::Department,
    employee::{Employee, EmployeeError},
};

pub use repository::employee_repository::{EmployeeRepository, RepositoryError};

pub use service::{
    grouping::DepartmentGroups,
    salary_ranking::{DepartmentSummary, SalaryRanking},
};
