//! roster summary command

use clap::Args;

use super::roster::RosterArgs;
use crate::report;

#[derive(Debug, Args)]
pub struct SummaryCommand {
    #[command(flatten)]
    pub roster: RosterArgs,
}

impl SummaryCommand {
    pub fn run(&self, json: bool) -> anyhow::Result<()> {
        let loaded = self.roster.load()?;
        let summaries = loaded.report.department_summaries()?;

        if json {
            println!("{}", report::summaries_json(&summaries)?);
        } else {
            print!("{}", report::summaries_text(&summaries));
        }
        Ok(())
    }
}
