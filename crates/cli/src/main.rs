//! Roster CLI - Department salary queries
//!
//! Usage:
//!   roster top-earners [--roster FILE]          - Highest paid employee per department
//!   roster department --id <ID> [--name <NAME>] - Highest paid employee in one department
//!   roster summary [--roster FILE]              - Headcount and salary totals per department
//!
//! Add `--json` for machine-readable output. Set `RUST_LOG=debug` to trace queries.

use clap::{Parser, Subcommand};
use cli::commands::{DepartmentCommand, SummaryCommand, TopEarnersCommand};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Roster - Department salary queries")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Highest paid employee in every department
    TopEarners(TopEarnersCommand),
    /// Highest paid employee in one department
    Department(DepartmentCommand),
    /// Headcount, totals and top earner per department
    Summary(SummaryCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging; logs go to stderr so --json output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::TopEarners(cmd) => cmd.run(cli.json),
        Commands::Department(cmd) => cmd.run(cli.json),
        Commands::Summary(cmd) => cmd.run(cli.json),
    }
}
