//! # mpp CLI entry point
//!
//! Parses command-line arguments, sets up logging, and dispatches to the
//! subcommand handlers in the library.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mpp_cli::endpoints::render_table;
use mpp_cli::history::run_history;
use mpp_cli::tour::run_tour;
use mpp_cli::{build_client, credentials};
use mpp_schema::registry::ENDPOINTS;

/// Command-line client for the Mon Petit Placement API.
#[derive(Parser, Debug)]
#[command(name = "mpp", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,

    /// Override a facade's base URL, e.g. `--base-url api=http://localhost:8080`.
    /// Repeatable; give every override before the subcommand.
    #[arg(long = "base-url", value_name = "FACADE=URL")]
    base_urls: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Log in and call every endpoint, printing a JSON summary.
    Tour,

    /// List every endpoint the client knows.
    Endpoints,

    /// Fetch the public history of an investment profile (no login).
    History {
        /// Profile slug: volontaire, energique, ambitieux or intrepide.
        profile: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::debug!("mpp CLI v{} starting", env!("CARGO_PKG_VERSION"));

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Endpoints => {
            print!("{}", render_table(ENDPOINTS));
        }
        Commands::History { profile } => {
            let client = build_client(&cli.base_urls)?;
            let history = run_history(&client, &profile).await?;
            println!("{}", serde_json::to_string_pretty(&history)?);
        }
        Commands::Tour => {
            let client = build_client(&cli.base_urls)?;
            let credentials = credentials::acquire()?;
            let summary = run_tour(&client, &credentials).await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_tour_with_verbosity() {
        let cli = Cli::try_parse_from(["mpp", "-vv", "tour"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Tour));
    }

    #[test]
    fn cli_parse_history_profile() {
        let cli = Cli::try_parse_from(["mpp", "history", "ambitieux"]).unwrap();
        match cli.command {
            Commands::History { profile } => assert_eq!(profile, "ambitieux"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn cli_parse_repeated_base_urls() {
        let cli = Cli::try_parse_from([
            "mpp",
            "--base-url",
            "api=http://localhost:8080",
            "--base-url",
            "sso=http://localhost:8081",
            "tour",
        ])
        .unwrap();
        assert_eq!(
            cli.base_urls,
            vec!["api=http://localhost:8080", "sso=http://localhost:8081"]
        );
    }

    #[test]
    fn cli_rejects_base_url_after_subcommand() {
        assert!(Cli::try_parse_from(["mpp", "tour", "--base-url", "api=http://localhost:8080"]).is_err());
    }

    #[test]
    fn cli_requires_a_subcommand() {
        assert!(Cli::try_parse_from(["mpp"]).is_err());
        assert!(Cli::try_parse_from(["mpp", "history"]).is_err());
    }
}
