//! roster department command

use clap::Args;
use roster_domain::Department;
use shared::RosterConfig;
use tracing::warn;

use super::roster::RosterArgs;
use crate::report;

#[derive(Debug, Args)]
pub struct DepartmentCommand {
    /// Department id
    #[arg(short, long)]
    pub id: i64,

    /// Department name; looked up from the roster by id when omitted
    #[arg(short, long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub roster: RosterArgs,
}

impl DepartmentCommand {
    pub fn run(&self, json: bool) -> anyhow::Result<()> {
        let loaded = self.roster.load()?;
        let department = self.resolve(&loaded.config);
        let top = loaded.report.top_earner_in(&department)?;

        if json {
            println!("{}", report::top_earner_json(&department, top.as_ref())?);
        } else {
            println!("{}", report::top_earner_text(&department, top.as_ref()));
        }
        Ok(())
    }

    /// The department to query
    ///
    /// Departments match on id AND name, so an explicit name that differs
    /// from the roster's yields no match rather than an error.
    fn resolve(&self, config: &RosterConfig) -> Department {
        match (&self.name, config.department(self.id)) {
            (Some(name), _) => Department::new(self.id, name.clone()),
            (None, Some(declared)) => declared,
            (None, None) => {
                warn!(department_id = self.id, "Department id not declared in roster");
                Department::new(self.id, String::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(id: i64, name: Option<&str>) -> DepartmentCommand {
        DepartmentCommand {
            id,
            name: name.map(str::to_string),
            roster: RosterArgs { roster: None },
        }
    }

    #[test]
    fn test_resolve_by_id() {
        let config = RosterConfig::sample();
        assert_eq!(command(2, None).resolve(&config), Department::new(2, "HR"));
    }

    #[test]
    fn test_resolve_explicit_name() {
        let config = RosterConfig::sample();
        assert_eq!(
            command(99, Some("Legal")).resolve(&config),
            Department::new(99, "Legal")
        );
    }

    #[test]
    fn test_resolve_unknown_id() {
        let config = RosterConfig::sample();
        let department = command(42, None).resolve(&config);

        let loaded = RosterArgs { roster: None }.load().unwrap();
        assert!(loaded.report.top_earner_in(&department).unwrap().is_none());
    }
}
