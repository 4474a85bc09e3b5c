//! roster top-earners command

use clap::Args;

use super::roster::RosterArgs;
use crate::report;

#[derive(Debug, Args)]
pub struct TopEarnersCommand {
    #[command(flatten)]
    pub roster: RosterArgs,
}

impl TopEarnersCommand {
    pub fn run(&self, json: bool) -> anyhow::Result<()> {
        let loaded = self.roster.load()?;
        let top = loaded.report.top_earners_by_department()?;

        if json {
            println!("{}", report::top_earners_json(&top)?);
        } else {
            print!("{}", report::top_earners_text(&top));
        }
        Ok(())
    }
}
