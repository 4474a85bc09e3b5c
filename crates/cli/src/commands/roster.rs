//! Roster source shared by every subcommand

use std::path::PathBuf;

use clap::Args;
use roster_adapter::repository::in_memory::InMemoryEmployeeRepository;
use roster_usecase::SalaryReportUseCase;
use shared::RosterConfig;
use tracing::info;

#[derive(Debug, Clone, Args)]
pub struct RosterArgs {
    /// Roster file (.json, .yaml or .yml); the built-in sample is used when omitted
    #[arg(long)]
    pub roster: Option<PathBuf>,
}

/// A loaded roster, ready to query
pub struct LoadedRoster {
    pub config: RosterConfig,
    pub report: SalaryReportUseCase<InMemoryEmployeeRepository>,
}

impl RosterArgs {
    pub fn load(&self) -> shared::Result<LoadedRoster> {
        let config = match &self.roster {
            Some(path) => RosterConfig::from_file(path)?,
            None => RosterConfig::sample(),
        };

        let employees = config.build()?;
        info!(
            source = %self.source_name(),
            departments = config.departments.len(),
            employees = employees.len(),
            "Loaded roster"
        );

        let repository = InMemoryEmployeeRepository::from_employees(employees)?;
        Ok(LoadedRoster {
            config,
            report: SalaryReportUseCase::new(repository),
        })
    }

    fn source_name(&self) -> String {
        match &self.roster {
            Some(path) => path.display().to_string(),
            None => "built-in sample".to_string(),
        }
    }
}
