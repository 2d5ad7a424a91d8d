//! Configuration CLI commands.
//!
//! Shows the routing snapshot the router would use and where it came from.
//! Settings are resolved env > settings file > default.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Config;
use crate::llm::routing::{RoutingConfig, RoutingOverrides};

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show the resolved routing configuration
    Show,

    /// Show the settings file location
    Path,
}

/// Run a config command.
pub fn run_config_command(cmd: ConfigCommand, settings: Option<PathBuf>) -> anyhow::Result<()> {
    let config = Config::load(settings, &RoutingOverrides::default())?;
    match cmd {
        ConfigCommand::Show => {
            print!("{}", format_routing(&config.routing));
            Ok(())
        }
        ConfigCommand::Path => {
            let state = if config.settings_path.exists() {
                "exists"
            } else {
                "not created yet"
            };
            println!("{} ({})", config.settings_path.display(), state);
            Ok(())
        }
    }
}

fn format_routing(routing: &RoutingConfig) -> String {
    format!(
        "  {:<18} {}\n  {:<18} {}\n  {:<18} {}\n",
        "enabled",
        routing.enabled,
        "simple_threshold",
        routing.simple_threshold,
        "show_complexity",
        routing.show_complexity
    )
}
