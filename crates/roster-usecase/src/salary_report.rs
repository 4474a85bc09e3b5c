//! SalaryReportUseCase - Top earners and department summaries

use std::collections::BTreeMap;

use roster_domain::{Department, DepartmentSummary, Employee, EmployeeRepository, RepositoryError, SalaryRanking};
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by the salary report flows
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Failed to read roster: {0}")]
    Repository(#[from] RepositoryError),
}

/// Runs salary queries against whatever repository it is given
pub struct SalaryReportUseCase<R: EmployeeRepository> {
    repository: R,
    ranking: SalaryRanking,
}

impl<R: EmployeeRepository> SalaryReportUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            ranking: SalaryRanking::new(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Highest paid employee of every department in the roster
    pub fn top_earners_by_department(&self) -> Result<BTreeMap<Department, Employee>, UseCaseError> {
        let employees = self.repository.list_all()?;
        let top = self.ranking.highest_paid_per_department(&employees);
        debug!(
            employees = employees.len(),
            departments = top.len(),
            "Computed top earners per department"
        );
        Ok(top)
    }

    /// Highest paid employee of `department`, None if it has no members
    pub fn top_earner_in(&self, department: &Department) -> Result<Option<Employee>, UseCaseError> {
        let employees = self.repository.list_all()?;
        let top = self.ranking.highest_paid_in_department(&employees, department);
        debug!(
            department = %department,
            found = top.is_some(),
            "Computed top earner in department"
        );
        Ok(top)
    }

    /// Headcount, totals and top earner per department
    pub fn department_summaries(&self) -> Result<Vec<DepartmentSummary>, UseCaseError> {
        let employees = self.repository.list_all()?;
        Ok(self.ranking.summarize_by_department(&employees))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_adapter::repository::in_memory::InMemoryEmployeeRepository;

    fn sample_repository() -> InMemoryEmployeeRepository {
        let it = Department::new(1, "IT");
        let hr = Department::new(2, "HR");
        let finance = Department::new(3, "Finance");

        InMemoryEmployeeRepository::from_employees(vec![
            Employee::new(1, "Alice", it.clone(), 95_000.0).unwrap(),
            Employee::new(2, "Bob", it, 120_000.0).unwrap(),
            Employee::new(3, "Charlie", hr.clone(), 70_000.0).unwrap(),
            Employee::new(4, "Diana", hr, 88_000.0).unwrap(),
            Employee::new(5, "Eve", finance.clone(), 99_000.0).unwrap(),
            Employee::new(6, "Frank", finance, 123_000.0).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_top_earners_by_department() {
        let use_case = SalaryReportUseCase::new(sample_repository());
        let top = use_case.top_earners_by_department().unwrap();

        let names: Vec<(&str, &str)> = top
            .iter()
            .map(|(department, employee)| (department.name(), employee.name()))
            .collect();
        assert_eq!(names, vec![("IT", "Bob"), ("HR", "Diana"), ("Finance", "Frank")]);
    }

    #[test]
    fn test_top_earner_in() {
        let use_case = SalaryReportUseCase::new(sample_repository());

        let it = use_case.top_earner_in(&Department::new(1, "IT")).unwrap();
        assert_eq!(it.unwrap().name(), "Bob");

        let legal = use_case.top_earner_in(&Department::new(99, "Legal")).unwrap();
        assert!(legal.is_none());
    }

    #[test]
    fn test_empty_repository() {
        let use_case = SalaryReportUseCase::new(InMemoryEmployeeRepository::new());

        assert!(use_case.top_earners_by_department().unwrap().is_empty());
        assert!(use_case.top_earner_in(&Department::new(1, "IT")).unwrap().is_none());
        assert!(use_case.department_summaries().unwrap().is_empty());
    }

    #[test]
    fn test_department_summaries() {
        let use_case = SalaryReportUseCase::new(sample_repository());
        let summaries = use_case.department_summaries().unwrap();

        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].department.name(), "IT");
        assert_eq!(summaries[0].headcount, 2);
        assert_eq!(summaries[0].total_salary, 215_000.0);
        assert_eq!(summaries[2].top_earner.name(), "Frank");
    }

    #[test]
    fn test_repository_error_propagates() {
        struct BrokenRepository;

        impl EmployeeRepository for BrokenRepository {
            fn add(&mut self, _employee: Employee) -> Result<(), RepositoryError> {
                unreachable!()
            }

            fn find_by_id(&self, _id: i64) -> Result<Option<Employee>, RepositoryError> {
                unreachable!()
            }

            fn find_by_department(&self, _department: &Department) -> Result<Vec<Employee>, RepositoryError> {
                unreachable!()
            }

            fn list_all(&self) -> Result<Vec<Employee>, RepositoryError> {
                Err(RepositoryError::StorageError {
                    message: "disk on fire".to_string(),
                })
            }

            fn count(&self) -> Result<usize, RepositoryError> {
                Ok(0)
            }
        }

        let use_case = SalaryReportUseCase::new(BrokenRepository);
        let err = use_case.top_earners_by_department().unwrap_err();
        assert_eq!(err.to_string(), "Failed to read roster: Storage error: disk on fire");
    }
}
