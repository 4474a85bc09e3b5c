//! Roster configuration files
//!
//! A roster file declares departments once and lets employees point at
//! them by id. JSON and YAML are both accepted; the file extension decides.

use std::collections::HashMap;
use std::path::Path;

use roster_domain::{Department, Employee};
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, UnknownDepartmentError};

/// One declared department
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentConfig {
    pub id: i64,
    pub name: String,
}

/// One employee, referencing its department by id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeConfig {
    pub id: i64,
    pub name: String,
    pub department_id: i64,
    pub salary: f64,
}

/// Roster file format (roster.json / roster.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterConfig {
    #[serde(default)]
    pub departments: Vec<DepartmentConfig>,

    #[serde(default)]
    pub employees: Vec<EmployeeConfig>,
}

impl RosterConfig {
    /// Load a roster from a `.json`, `.yaml` or `.yml` file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            _ => Err(RosterError::Config(format!(
                "Unsupported roster file '{}': expected .json, .yaml or .yml",
                path.display()
            ))),
        }
    }

    pub fn from_json_str(content: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> crate::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Built-in sample roster: IT, HR and Finance with two employees each
    pub fn sample() -> Self {
        let departments = [(1, "IT"), (2, "HR"), (3, "Finance")]
            .into_iter()
            .map(|(id, name)| DepartmentConfig {
                id,
                name: name.to_string(),
            })
            .collect();

        let employees = [
            (1, "Alice", 1, 95_000.0),
            (2, "Bob", 1, 120_000.0),
            (3, "Charlie", 2, 70_000.0),
            (4, "Diana", 2, 88_000.0),
            (5, "Eve", 3, 99_000.0),
            (6, "Frank", 3, 123_000.0),
        ]
        .into_iter()
        .map(|(id, name, department_id, salary)| EmployeeConfig {
            id,
            name: name.to_string(),
            department_id,
            salary,
        })
        .collect();

        Self {
            departments,
            employees,
        }
    }

    /// Look up a declared department by id
    pub fn department(&self, id: i64) -> Option<Department> {
        self.departments
            .iter()
            .find(|d| d.id == id)
            .map(|d| Department::new(d.id, d.name.clone()))
    }

    /// Validate the roster and build employees in file order
    pub fn build(&self) -> crate::Result<Vec<Employee>> {
        let mut departments: HashMap<i64, Department> = HashMap::new();
        for declared in &self.departments {
            let department = Department::new(declared.id, declared.name.clone());
            if departments.insert(declared.id, department).is_some() {
                return Err(RosterError::Config(format!(
                    "Department id {} is declared more than once",
                    declared.id
                )));
            }
        }

        self.employees
            .iter()
            .map(|entry| -> crate::Result<Employee> {
                let department = departments.get(&entry.department_id).cloned().ok_or_else(|| {
                    let mut known_ids: Vec<i64> = departments.keys().copied().collect();
                    known_ids.sort_unstable();
                    UnknownDepartmentError {
                        employee_id: entry.id,
                        department_id: entry.department_id,
                        known_ids,
                    }
                })?;

                Ok(Employee::new(entry.id, entry.name.clone(), department, entry.salary)?)
            })
            .collect()
    }
}
