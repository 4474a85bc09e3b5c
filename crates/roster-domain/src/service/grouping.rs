//! Grouping - Partition employees by department
//!
//! The first half of the group-then-reduce pipeline. Builds a
//! multimap from Department to the employees that reference it,
//! keyed by value equality.

use std::collections::HashMap;

use crate::model::department::Department;
use crate::model::employee::Employee;

/// Employees partitioned by department
///
/// - Groups are kept in order of the department's first appearance.
/// - Members of a group keep their input order.
/// - No group is ever empty.
#[derive(Debug, Clone)]
pub struct DepartmentGroups<'a> {
    groups: Vec<(Department, Vec<&'a Employee>)>,
    index: HashMap<Department, usize>,
}

impl<'a> DepartmentGroups<'a> {
    /// Partition `employees` by department
    pub fn from_employees(employees: &'a [Employee]) -> Self {
        let mut groups: Vec<(Department, Vec<&'a Employee>)> = Vec::new();
        let mut index: HashMap<Department, usize> = HashMap::new();

        for employee in employees {
            match index.get(employee.department()) {
                Some(&slot) => groups[slot].1.push(employee),
                None => {
                    index.insert(employee.department().clone(), groups.len());
                    groups.push((employee.department().clone(), vec![employee]));
                }
            }
        }

        Self { groups, index }
    }

    /// Members of one department, or None if it never appeared
    pub fn get(&self, department: &Department) -> Option<&[&'a Employee]> {
        self.index
            .get(department)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    /// Iterate groups in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = (&Department, &[&'a Employee])> {
        self.groups
            .iter()
            .map(|(department, members)| (department, members.as_slice()))
    }

    /// Departments in first-appearance order
    pub fn departments(&self) -> impl Iterator<Item = &Department> {
        self.groups.iter().map(|(department, _)| department)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: i64, name: &str, department: &Department, salary: f64) -> Employee {
        Employee::new(id, name, department.clone(), salary).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let groups = DepartmentGroups::from_employees(&[]);
        assert!(groups.is_empty());
        assert_eq!(groups.len(), 0);
    }

    #[test]
    fn test_groups_keep_first_appearance_and_member_order() {
        let it = Department::new(1, "IT");
        let hr = Department::new(2, "HR");
        let employees = vec![
            employee(1, "Charlie", &hr, 70_000.0),
            employee(2, "Alice", &it, 95_000.0),
            employee(3, "Diana", &hr, 88_000.0),
            employee(4, "Bob", &it, 120_000.0),
        ];

        let groups = DepartmentGroups::from_employees(&employees);

        let order: Vec<&str> = groups.departments().map(|d| d.name()).collect();
        assert_eq!(order, vec!["HR", "IT"]);

        let hr_names: Vec<&str> = groups.get(&hr).unwrap().iter().map(|e| e.name()).collect();
        assert_eq!(hr_names, vec!["Charlie", "Diana"]);

        let it_names: Vec<&str> = groups.get(&it).unwrap().iter().map(|e| e.name()).collect();
        assert_eq!(it_names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_equal_but_distinct_departments_share_a_group() {
        // Each employee carries its own Department instance
        let employees = vec![
            Employee::new(1, "Alice", Department::new(1, "IT"), 95_000.0).unwrap(),
            Employee::new(2, "Bob", Department::new(1, "IT"), 120_000.0).unwrap(),
        ];

        let groups = DepartmentGroups::from_employees(&employees);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.get(&Department::new(1, "IT")).unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_department_lookup() {
        let it = Department::new(1, "IT");
        let employees = vec![employee(1, "Alice", &it, 95_000.0)];

        let groups = DepartmentGroups::from_employees(&employees);
        assert!(groups.get(&Department::new(99, "Legal")).is_none());
    }

    #[test]
    fn test_no_group_is_empty() {
        let it = Department::new(1, "IT");
        let hr = Department::new(2, "HR");
        let employees = vec![employee(1, "Alice", &it, 1.0), employee(2, "Charlie", &hr, 2.0)];

        let groups = DepartmentGroups::from_employees(&employees);
        assert!(groups.iter().all(|(_, members)| !members.is_empty()));
    }
}
