//! Report rendering - plain text for terminals, JSON for scripts

use std::collections::BTreeMap;

use chrono::Utc;
use console::style;
use roster_domain::{Department, DepartmentSummary, Employee};
use serde::Serialize;

/// Serializable view of an employee
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeView {
    pub id: i64,
    pub name: String,
    pub department_id: i64,
    pub department: String,
    pub salary: f64,
}

impl From<&Employee> for EmployeeView {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id(),
            name: employee.name().to_string(),
            department_id: employee.department().id(),
            department: employee.department().name().to_string(),
            salary: employee.salary(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    pub department_id: i64,
    pub department: String,
    pub headcount: usize,
    pub total_salary: f64,
    pub average_salary: f64,
    pub top_earner: EmployeeView,
}

impl From<&DepartmentSummary> for SummaryView {
    fn from(summary: &DepartmentSummary) -> Self {
        Self {
            department_id: summary.department.id(),
            department: summary.department.name().to_string(),
            headcount: summary.headcount,
            total_salary: summary.total_salary,
            average_salary: summary.average_salary,
            top_earner: EmployeeView::from(&summary.top_earner),
        }
    }
}

/// JSON envelope: every report carries its generation time
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<T: Serialize> {
    pub generated_at: String,
    pub result: T,
}

impl<T: Serialize> Report<T> {
    pub fn new(result: T) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            result,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn top_earners_json(top: &BTreeMap<Department, Employee>) -> anyhow::Result<String> {
    let views: Vec<EmployeeView> = top.values().map(EmployeeView::from).collect();
    Report::new(views).to_json()
}

pub fn top_earners_text(top: &BTreeMap<Department, Employee>) -> String {
    if top.is_empty() {
        return "No employees in roster".to_string();
    }

    let mut out = format!("{}\n", style("Highest paid per department").bold());
    for (department, employee) in top {
        out.push_str(&format!(
            "  {:<16} {:<16} {:>12.2}\n",
            department.name(),
            employee.name(),
            employee.salary()
        ));
    }
    out
}

pub fn top_earner_json(department: &Department, top: Option<&Employee>) -> anyhow::Result<String> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct TopEarnerView {
        department_id: i64,
        department: String,
        top_earner: Option<EmployeeView>,
    }

    Report::new(TopEarnerView {
        department_id: department.id(),
        department: department.name().to_string(),
        top_earner: top.map(EmployeeView::from),
    })
    .to_json()
}

pub fn top_earner_text(department: &Department, top: Option<&Employee>) -> String {
    match top {
        Some(employee) => format!(
            "Highest paid in {}: {} ({:.2})",
            department,
            style(employee.name()).bold(),
            employee.salary()
        ),
        None => format!("No match: nobody works in {}", department),
    }
}

pub fn summaries_json(summaries: &[DepartmentSummary]) -> anyhow::Result<String> {
    let views: Vec<SummaryView> = summaries.iter().map(SummaryView::from).collect();
    Report::new(views).to_json()
}

pub fn summaries_text(summaries: &[DepartmentSummary]) -> String {
    if summaries.is_empty() {
        return "No employees in roster".to_string();
    }

    let mut out = format!(
        "{}\n",
        style(format!(
            "  {:<16} {:>5} {:>14} {:>12}  {}",
            "Department", "Staff", "Total", "Average", "Top earner"
        ))
        .bold()
    );
    for summary in summaries {
        out.push_str(&format!(
            "  {:<16} {:>5} {:>14.2} {:>12.2}  {}\n",
            summary.department.name(),
            summary.headcount,
            summary.total_salary,
            summary.average_salary,
            summary.top_earner.name()
        ));
    }
    out
}
