//! Salary Ranking - Extremum queries over an employee roster
//!
//! Pure domain logic: every query takes an ordered slice of employees
//! and returns a freshly built result. No I/O, no shared state.
//!
//! ## Tie-break
//!
//! When several employees share the maximal salary, the one that comes
//! FIRST in the input wins. A candidate only replaces the running best
//! when its salary is strictly greater.

use std::collections::BTreeMap;

use crate::model::department::Department;
use crate::model::employee::Employee;
use crate::service::grouping::DepartmentGroups;

/// Aggregate figures for one department
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentSummary {
    pub department: Department,
    pub headcount: usize,
    /// Sum of salaries, saturated at `f64::MAX` instead of overflowing to infinity
    pub total_salary: f64,
    /// Running mean; always finite since every salary is
    pub average_salary: f64,
    /// Highest paid member, using the first-in-input tie-break
    pub top_earner: Employee,
}

/// SalaryRanking - stateless query service
///
/// Holds no data; all input arrives per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalaryRanking;

impl SalaryRanking {
    /// Create a new SalaryRanking
    pub fn new() -> Self {
        Self
    }

    /// Highest paid employee of every department present in `employees`
    ///
    /// The key set is exactly the set of distinct departments in the
    /// input; an empty input yields an empty map.
    pub fn highest_paid_per_department(&self, employees: &[Employee]) -> BTreeMap<Department, Employee> {
        DepartmentGroups::from_employees(employees)
            .iter()
            .filter_map(|(department, members)| {
                highest_paid(members.iter().copied())
                    .map(|top| (department.clone(), top.clone()))
            })
            .collect()
    }

    /// Highest paid employee of `target`, or None if nobody works there
    pub fn highest_paid_in_department(&self, employees: &[Employee], target: &Department) -> Option<Employee> {
        self.highest_paid_where(employees, |e| e.works_in(target))
    }

    /// Highest paid employee among those matching `predicate`
    pub fn highest_paid_where<P>(&self, employees: &[Employee], predicate: P) -> Option<Employee>
    where
        P: Fn(&Employee) -> bool,
    {
        highest_paid(employees.iter().filter(|e| predicate(e))).cloned()
    }

    /// Headcount, totals and top earner per department
    ///
    /// Summaries come back in order of each department's first
    /// appearance in `employees`.
    pub fn summarize_by_department(&self, employees: &[Employee]) -> Vec<DepartmentSummary> {
        DepartmentGroups::from_employees(employees)
            .iter()
            .filter_map(|(department, members)| {
                let top_earner = highest_paid(members.iter().copied())?.clone();
                let (total_salary, average_salary) = salary_totals(members);

                Some(DepartmentSummary {
                    department: department.clone(),
                    headcount: members.len(),
                    total_salary,
                    average_salary,
                    top_earner,
                })
            })
            .collect()
    }
}

/// Saturating total and running mean of the members' salaries
fn salary_totals(members: &[&Employee]) -> (f64, f64) {
    let mut total = 0.0_f64;
    let mut mean = 0.0_f64;
    for (k, employee) in members.iter().enumerate() {
        let salary = employee.salary();
        total = (total + salary).min(f64::MAX);
        mean += (salary - mean) / (k + 1) as f64;
    }
    (total, mean)
}

/// Single pass max-by-salary, seeded with the first element
fn highest_paid<'a, I>(employees: I) -> Option<&'a Employee>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut iter = employees.into_iter();
    let first = iter.next()?;
    Some(iter.fold(first, |best, candidate| {
        if candidate.salary() > best.salary() {
            candidate
        } else {
            best
        }
    }))
}
