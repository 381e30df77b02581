use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use log::{debug, error};
use std::process;

use branchout::commands::run::{self, RunOutcome};
use branchout::config::CliConfig;
use branchout::projects;

#[derive(Parser)]
#[command(name = "branchout")]
#[command(about = "Cut a new branch from your main branch across multiple git projects")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "branchout", &mut std::io::stdout());
        return Ok(());
    }

    if let Err(err) = interactive_run() {
        error!("{err}");
        for (idx, cause) in err.chain().skip(1).enumerate() {
            debug!("Caused by {}: {}", idx + 1, cause);
        }
        process::exit(1);
    }

    Ok(())
}

fn interactive_run() -> Result<()> {
    // PROJECTS may come from a local .env file; a missing file is fine.
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(err) => debug!("No .env file loaded: {err}"),
    }

    let projects = projects::from_env()?;
    let config = CliConfig::load()?;

    match run::run(config, &projects)? {
        RunOutcome::Completed(_) => Ok(()),
        RunOutcome::Cancelled => {
            println!("\nRun cancelled. Exiting without creating branches.");
            Ok(())
        }
    }
}
