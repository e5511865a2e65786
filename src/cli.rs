//! Command line surface and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::Config;
use crate::store::RouteStore;
use crate::table::display_routes;

#[derive(Debug, Parser)]
#[command(name = "routes", version, about = "Record and query bus routes")]
pub struct Cli {
    /// The data file name
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Add a new route
    Add {
        /// The start station name
        #[arg(short, long)]
        start: String,
        /// The end station name
        #[arg(short, long)]
        end: String,
        /// Number of route
        #[arg(short, long, allow_negative_numbers = true)]
        number: i64,
    },
    /// Display all routes
    Display,
    /// Select the routes starting or ending at a station
    Select {
        /// Station name to match
        #[arg(long)]
        sr: String,
    },
}

/// Initialize the schema at the configured path, then run `command` if any.
pub fn run(config: &Config, command: Option<Command>) -> Result<()> {
    let store = RouteStore::new(config);
    store
        .initialize_schema()
        .with_context(|| format!("failed to initialize {}", store.path().display()))?;

    match command {
        Some(Command::Add { start, end, number }) => {
            store
                .add_route(&start, &end, number)
                .context("failed to add route")?;
            info!(%start, %end, number, "route stored");
        }
        Some(Command::Display) => {
            let routes = store.select_all().context("failed to list routes")?;
            display_routes(&routes)?;
        }
        Some(Command::Select { sr }) => {
            let routes = store
                .select_routes(&sr)
                .with_context(|| format!("failed to select routes for {sr}"))?;
            display_routes(&routes)?;
        }
        None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_add_with_short_flags() {
        let cli = Cli::try_parse_from(["routes", "add", "-s", "A", "-e", "B", "-n", "5"]).unwrap();
        assert_eq!(cli.db, None);
        assert_eq!(
            cli.command,
            Some(Command::Add {
                start: "A".into(),
                end: "B".into(),
                number: 5
            })
        );
    }

    #[test]
    fn db_is_accepted_after_the_verb() {
        let cli = Cli::try_parse_from(["routes", "display", "--db", "/tmp/x.db"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.db")));
        assert_eq!(cli.command, Some(Command::Display));
    }

    #[test]
    fn parses_select() {
        let cli = Cli::try_parse_from(["routes", "--db", "r.db", "select", "--sr", "B"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("r.db")));
        assert_eq!(cli.command, Some(Command::Select { sr: "B".into() }));
    }

    #[test]
    fn negative_route_number_is_accepted() {
        let cli = Cli::try_parse_from(["routes", "add", "-s", "A", "-e", "B", "-n", "-3"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Add { number: -3, .. })));
    }

    #[test]
    fn non_integer_number_is_a_usage_error() {
        let err = Cli::try_parse_from(["routes", "add", "-s", "A", "-e", "B", "-n", "ten"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn missing_required_flag_is_a_usage_error() {
        let err = Cli::try_parse_from(["routes", "add", "-s", "A", "-n", "1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["routes", "select"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn unknown_verb_is_rejected() {
        let err = Cli::try_parse_from(["routes", "remove"]).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument
        ));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn no_verb_is_allowed() {
        let cli = Cli::try_parse_from(["routes"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn version_flag() {
        let err = Cli::try_parse_from(["routes", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn run_without_command_creates_database() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config::new(dir.path().join("routes.db"));
        run(&config, None).unwrap();
        assert!(config.db_path.exists());
    }

    #[test]
    fn run_add_then_select() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config::new(dir.path().join("routes.db"));
        run(
            &config,
            Some(Command::Add {
                start: "Stavropol".into(),
                end: "Krasnodar".into(),
                number: 1,
            }),
        )
        .unwrap();

        let routes = RouteStore::new(&config).select_routes("Krasnodar").unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].start, "Stavropol");
    }
}
