// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dw - replay and inspect a streaming blueprint deployment

mod color;
mod commands;
mod config;
mod env;
mod exit_error;
mod input;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{summary, tree};
use crate::config::{Config, Overrides, Settings, DEFAULT_LOG_FILTER};
use crate::exit_error::{exit_code, ExitError};
use crate::output::OutputFormat;

/// Track the state of a blueprint deployment from its event stream
#[derive(Parser)]
#[command(name = "dw", version, styles = color::styles())]
struct Cli {
    /// Config file (default: $DW_CONFIG, then ./dw.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Instance ID of the deployment itself
    #[arg(long, global = true, value_name = "ID")]
    instance_id: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Log filter directive, e.g. `dw_tracker=debug`
    #[arg(long, global = true, value_name = "FILTER")]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a deployment and report what succeeded, failed, or was interrupted
    Summary(summary::SummaryArgs),
    /// Print the element hierarchy with every child blueprint expanded
    Tree(tree::TreeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ExitError>() {
                Some(exit) if exit.message.is_empty() => {}
                Some(exit) => eprintln!("{}", exit.message),
                None => eprintln!("error: {err}"),
            }
            ExitCode::from(u8::try_from(exit_code(&err)).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.or_else(env::config_path);
    let file = Config::load(config_path.as_deref())?;
    let flags = Overrides {
        instance_id: cli.instance_id,
        log: cli.log,
        output: cli.output,
    };
    let settings = Settings::resolve(flags, env::overrides()?, file);
    init_logging(&settings.log_filter);
    tracing::debug!(?settings, "resolved settings");

    match cli.command {
        Commands::Summary(args) => summary::handle(args, &settings),
        Commands::Tree(args) => tree::handle(args, &settings),
    }
}

fn init_logging(directive: &str) {
    let filter =
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
