//! Employee Repository - Abstract storage for Employees
//!
//! This trait defines what the domain needs from a roster store.
//! How it's kept (memory, file, database) is the adapter's concern.

use crate::model::department::Department;
use crate::model::employee::Employee;

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// An employee with this id is already stored
    DuplicateId { id: i64 },
    /// The backing store failed
    StorageError { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::DuplicateId { id } => {
                write!(f, "Employee already exists: {}", id)
            }
            RepositoryError::StorageError { message } => {
                write!(f, "Storage error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Employee Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// Implementations must hand employees back in insertion order;
/// the salary queries rely on that order for tie-breaking.
pub trait EmployeeRepository {
    /// Add an employee; ids must be unique
    fn add(&mut self, employee: Employee) -> Result<(), RepositoryError>;

    /// Find an employee by ID
    fn find_by_id(&self, id: i64) -> Result<Option<Employee>, RepositoryError>;

    /// Find all employees of a department, in insertion order
    fn find_by_department(&self, department: &Department) -> Result<Vec<Employee>, RepositoryError>;

    /// List all employees, in insertion order
    fn list_all(&self) -> Result<Vec<Employee>, RepositoryError>;

    /// Distinct departments, in order of first appearance
    fn departments(&self) -> Result<Vec<Department>, RepositoryError> {
        let mut seen: Vec<Department> = Vec::new();
        for employee in self.list_all()? {
            if !seen.contains(employee.department()) {
                seen.push(employee.department().clone());
            }
        }
        Ok(seen)
    }

    /// Count all employees
    fn count(&self) -> Result<usize, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Vec-backed implementation for testing the default methods
    struct VecEmployeeRepo {
        employees: Vec<Employee>,
    }

    impl EmployeeRepository for VecEmployeeRepo {
        fn add(&mut self, employee: Employee) -> Result<(), RepositoryError> {
            if self.employees.iter().any(|e| e.id() == employee.id()) {
                return Err(RepositoryError::DuplicateId { id: employee.id() });
            }
            self.employees.push(employee);
            Ok(())
        }

        fn find_by_id(&self, id: i64) -> Result<Option<Employee>, RepositoryError> {
            Ok(self.employees.iter().find(|e| e.id() == id).cloned())
        }

        fn find_by_department(&self, department: &Department) -> Result<Vec<Employee>, RepositoryError> {
            Ok(self
                .employees
                .iter()
                .filter(|e| e.works_in(department))
                .cloned()
                .collect())
        }

        fn list_all(&self) -> Result<Vec<Employee>, RepositoryError> {
            Ok(self.employees.clone())
        }

        fn count(&self) -> Result<usize, RepositoryError> {
            Ok(self.employees.len())
        }
    }

    #[test]
    fn test_departments_in_first_appearance_order() {
        let hr = Department::new(2, "HR");
        let it = Department::new(1, "IT");
        let mut repo = VecEmployeeRepo { employees: Vec::new() };

        repo.add(Employee::new(1, "Charlie", hr.clone(), 70_000.0).unwrap()).unwrap();
        repo.add(Employee::new(2, "Alice", it.clone(), 95_000.0).unwrap()).unwrap();
        repo.add(Employee::new(3, "Diana", hr.clone(), 88_000.0).unwrap()).unwrap();

        assert_eq!(repo.departments().unwrap(), vec![hr, it]);
    }

    #[test]
    fn test_duplicate_id_error_display() {
        let err = RepositoryError::DuplicateId { id: 42 };
        assert_eq!(err.to_string(), "Employee already exists: 42");
    }
}
