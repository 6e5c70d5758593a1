// CLI module - command-line argument parsing and handlers
//
// - (no subcommand): run the dashboard
// - alerts <cluster>: fetch one cluster's alerts and print them
// - config --show | --path | --reset: inspect or regenerate the config file

use crate::config::{Config, VERSION};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// Cluster alerts dashboard
#[derive(Parser, Debug)]
#[command(name = "cluster-alerts")]
#[command(version = VERSION)]
#[command(about = "Terminal dashboard for cluster alerts", long_about = None)]
pub struct Cli {
    /// Serve canned demo clusters instead of calling the portal
    #[arg(long, global = true)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and print the alerts of one cluster
    Alerts {
        /// Cluster name as listed by the portal
        cluster: String,

        /// Print the raw JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Handle `config` flags. Runs synchronously and prints to stdout.
pub fn handle_config(show: bool, path: bool, reset: bool) -> Result<()> {
    if path {
        let path = Config::config_path().context("Could not determine config path")?;
        println!("{}", path.display());
    } else if show {
        handle_config_show();
    } else if reset {
        handle_config_reset()?;
    } else {
        println!("Usage: cluster-alerts config [--show|--path|--reset]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --path    Show config file path");
        println!("  --reset   Reset config file to defaults");
    }
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_alerts_subcommand() {
        let cli = Cli::try_parse_from(["cluster-alerts", "alerts", "prod-1", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Alerts { cluster, json }) => {
                assert_eq!(cluster, "prod-1");
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn demo_flag_is_global() {
        let cli = Cli::try_parse_from(["cluster-alerts", "alerts", "x", "--demo"]).unwrap();
        assert!(cli.demo);
        let cli = Cli::try_parse_from(["cluster-alerts"]).unwrap();
        assert!(!cli.demo);
        assert!(cli.command.is_none());
    }

    #[test]
    fn alerts_requires_cluster() {
        assert!(Cli::try_parse_from(["cluster-alerts", "alerts"]).is_err());
    }
}
