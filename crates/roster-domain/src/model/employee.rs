//! Employee - A salaried member of exactly one Department
//!
//! An Employee holds its Department by value. It does not own the
//! department in any lifecycle sense; it just carries a copy that
//! compares equal to every other copy of the same department.

use super::department::Department;

/// Reasons an Employee cannot be constructed
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeError {
    /// Salary was NaN, infinite, or negative
    InvalidSalary { employee_id: i64, salary: f64 },
}

impl core::fmt::Display for EmployeeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EmployeeError::InvalidSalary {
                employee_id,
                salary,
            } => {
                write!(
                    f,
                    "Invalid salary for employee {}: {} (must be finite and non-negative)",
                    employee_id, salary
                )
            }
        }
    }
}

impl std::error::Error for EmployeeError {}

/// Employee - immutable once built
///
/// Every Employee has a Department (there is no absent state) and a
/// finite, non-negative salary. Both are checked in [`Employee::new`],
/// so the queries never see malformed records.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    id: i64,
    name: String,
    department: Department,
    salary: f64,
}

impl Employee {
    /// Create a new Employee
    ///
    /// Fails fast when `salary` is not a finite, non-negative number.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        department: Department,
        salary: f64,
    ) -> Result<Self, EmployeeError> {
        if !salary.is_finite() || salary < 0.0 {
            return Err(EmployeeError::InvalidSalary {
                employee_id: id,
                salary,
            });
        }

        Ok(Self {
            id,
            name: name.into(),
            department,
            salary,
        })
    }

    // ========== Getters ==========

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> &Department {
        &self.department
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// Check if this employee belongs to `department` (by value)
    pub fn works_in(&self, department: &Department) -> bool {
        &self.department == department
    }
}

impl core::fmt::Display for Employee {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}({:.0})", self.name, self.salary)
    }
}
