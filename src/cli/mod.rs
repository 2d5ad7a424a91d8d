//! Command-line interface.
//!
//! A thin surface over the routing core: every subcommand resolves the
//! configuration, calls one core operation and prints the result.

mod config;
mod route;

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use config::ConfigCommand;

#[derive(Parser, Debug)]
#[command(
    name = "task-router",
    version,
    about = "Route coding tasks between the flash and pro model tiers"
)]
pub struct Cli {
    /// Settings file (default: <config dir>/task-router/settings.toml)
    #[arg(long, global = true, env = "TASK_ROUTER_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a task's complexity (0-100)
    Score {
        /// Task text, or "-" to read from stdin
        task: String,

        /// Show how each rule contributed
        #[arg(long)]
        explain: bool,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pick the model tier for a task
    Route {
        /// Task text, or "-" to read from stdin
        task: String,

        /// Scores below this route to flash
        #[arg(long)]
        threshold: Option<u32>,

        /// Disable routing (always pro)
        #[arg(long)]
        disable: bool,

        /// Do not print the complexity score
        #[arg(long)]
        hide_complexity: bool,

        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether routing is supported for a model
    Check {
        /// Model identifier (e.g. "gemini-2.5-pro")
        model: String,
    },

    /// Show the fallback target for an unavailable model
    Fallback {
        /// Model identifier that is unavailable
        model: String,
    },

    /// Inspect routing configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Run a parsed command.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = cli.settings;
    match cli.command {
        Command::Score {
            task,
            explain,
            json,
        } => route::run_score(&read_task(&task)?, explain, json),
        Command::Route {
            task,
            threshold,
            disable,
            hide_complexity,
            json,
        } => {
            let mut overrides = crate::llm::routing::RoutingOverrides::default();
            if let Some(threshold) = threshold {
                overrides = overrides.simple_threshold(threshold);
            }
            if disable {
                overrides = overrides.enabled(false);
            }
            if hide_complexity {
                overrides = overrides.show_complexity(false);
            }
            route::run_route(&read_task(&task)?, settings, &overrides, json)
        }
        Command::Check { model } => {
            route::run_check(&model);
            Ok(())
        }
        Command::Fallback { model } => {
            route::run_fallback(&model);
            Ok(())
        }
        Command::Config(cmd) => config::run_config_command(cmd, settings),
    }
}

/// Task text from the argument, or stdin when the argument is "-".
fn read_task(arg: &str) -> anyhow::Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
