use std::io;

use clap::Parser;
use colored::Colorize;
use gitlabel_cli::{
    args::Cli,
    errors::Error,
    prompt::confirm_with_user,
    sync_cmd::{connect_to_github, execute, RunOutcome},
};
use gitlabel_core::{ReconcileOutcome, WriteOutcome};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    // Logs go to stderr so that label listings on stdout stay parseable
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_env("GITLABEL_LOG").unwrap_or_else(|_| EnvFilter::new("off")))
        .init();

    let cli = Cli::parse();
    let result = execute(&cli, connect_to_github, &confirm_with_user, &mut io::stdout()).await;

    match result {
        Ok(RunOutcome::Completed(WriteOutcome::Repository(ReconcileOutcome::Applied(report)))) => {
            println!("{}", report.summary());
            std::process::exit(0);
        }
        Ok(RunOutcome::Completed(_)) => std::process::exit(0),
        Ok(RunOutcome::Cancelled) => {
            println!("{}", "Aborted!".yellow());
            std::process::exit(1);
        }
        Err(Error::InvalidArguments(msg)) => {
            println!("{} {}", "ERROR:".red(), msg);
            std::process::exit(2);
        }
        Err(e) => {
            error!("Error: {e}");
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(e.exit_code());
        }
    }
}
