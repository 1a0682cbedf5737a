pub mod check;
pub mod log;

use crate::libs::{config::Config, messages::macros};
use crate::msg_error;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Confirm and log today's work window (default)")]
    Log(log::LogArgs),
    #[command(about = "Validate configuration and issue access without logging")]
    Check(check::CheckArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(long, global = true, help = "Read environment variables from this file instead of ./.env")]
    env_file: Option<PathBuf>,
    #[arg(long, global = true, help = "Route output through tracing with debug details")]
    debug: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub async fn menu() -> ExitCode {
        let cli = Self::parse();
        let env_file = Config::load_env_file(cli.env_file.as_deref());
        if cli.debug {
            macros::enable_debug_mode();
        }
        if macros::is_debug_mode() {
            init_tracing(cli.debug);
        }

        let result = match env_file {
            Ok(()) => cli.execute().await,
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                msg_error!(format!("{:#}", e));
                ExitCode::FAILURE
            }
        }
    }

    async fn execute(self) -> anyhow::Result<()> {
        let config = Config::from_env()?;

        match self.command.unwrap_or_else(|| Commands::Log(log::LogArgs::default())) {
            Commands::Log(args) => log::cmd(args, config).await.map(|_| ())?,
            Commands::Check(args) => check::cmd(args, config).await?,
        }
        Ok(())
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "jira_worklog=debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}
