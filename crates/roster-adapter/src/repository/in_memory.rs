//! In-Memory Repository Implementation
//!
//! Keeps employees in a Vec so insertion order survives,
//! which the salary tie-break depends on.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use roster_domain::model::department::Department;
use roster_domain::model::employee::Employee;
use roster_domain::repository::employee_repository::{EmployeeRepository, RepositoryError};
use tracing::{debug, warn};

/// Employees in insertion order plus an id -> position index
#[derive(Debug, Default)]
struct Storage {
    employees: Vec<Employee>,
    positions: HashMap<i64, usize>,
}

/// In-memory Employee Repository
///
/// Thread-safe implementation using RwLock. Clones share storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    storage: Arc<RwLock<Storage>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(Storage::default())),
        }
    }

    /// Build a repository from a roster, rejecting duplicate ids
    pub fn from_employees(employees: impl IntoIterator<Item = Employee>) -> Result<Self, RepositoryError> {
        let mut repo = Self::new();
        for employee in employees {
            repo.add(employee)?;
        }
        Ok(repo)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Storage>, RepositoryError> {
        self.storage.read().map_err(|_| RepositoryError::StorageError {
            message: "Failed to acquire read lock".to_string(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Storage>, RepositoryError> {
        self.storage.write().map_err(|_| RepositoryError::StorageError {
            message: "Failed to acquire write lock".to_string(),
        })
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn add(&mut self, employee: Employee) -> Result<(), RepositoryError> {
        let mut storage = self.write()?;
        if storage.positions.contains_key(&employee.id()) {
            warn!(employee_id = employee.id(), "Rejected duplicate employee id");
            return Err(RepositoryError::DuplicateId { id: employee.id() });
        }
        debug!(
            employee_id = employee.id(),
            department = employee.department().name(),
            "Added employee"
        );
        let position = storage.employees.len();
        storage.positions.insert(employee.id(), position);
        storage.employees.push(employee);
        Ok(())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Employee>, RepositoryError> {
        let storage = self.read()?;
        Ok(storage
            .positions
            .get(&id)
            .map(|&position| storage.employees[position].clone()))
    }

    fn find_by_department(&self, department: &Department) -> Result<Vec<Employee>, RepositoryError> {
        let storage = self.read()?;
        Ok(storage
            .employees
            .iter()
            .filter(|e| e.works_in(department))
            .cloned()
            .collect())
    }

    fn list_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        let storage = self.read()?;
        Ok(storage.employees.clone())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        let storage = self.read()?;
        Ok(storage.employees.len())
    }
}
