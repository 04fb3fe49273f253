//! `ems` command-line entry point.
//!
//! Opens (and migrates) the store, optionally starts file logging, runs one
//! command and prints its result as pretty JSON.

mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use ems_core::{default_log_level, init_logging, open_db};
use log::{error, info};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        ems_core::core_version()
    );

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;

    match commands::execute(cli.command, &conn) {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(err) => {
            error!("event=cli_command module=cli status=error error={err}");
            Err(err)
        }
    }
}
