//! CLI for building signed darkroom URLs.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{self, DarkroomConfig};
use commands::{run_config_path, run_hash, run_info, run_url, TransformArgs};

/// Top-level CLI for darkroom URL generation.
#[derive(Debug, Parser)]
#[command(name = "darkroom-url")]
#[command(about = "Build signed URLs for the darkroom image service", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/darkroom/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Darkroom host; repeat for round-robin across several. Overrides `hosts` in the config.
    #[arg(long = "host", global = true, value_name = "URL")]
    pub hosts: Vec<String>,

    /// Shared salt. Overrides `salt` in the config.
    #[arg(long, global = true, env = "DARKROOM_SALT", hide_env_values = true)]
    pub salt: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print a signed transform URL for each resource (hosts rotate per resource).
    Url {
        /// Resource identifiers on the darkroom service.
        #[arg(required = true)]
        resources: Vec<String>,

        #[command(flatten)]
        transform: TransformArgs,
    },

    /// Print the metadata (info) URL for a resource.
    Info {
        /// Resource identifier.
        resource: String,
    },

    /// Print only the action hash, for checking against a darkroom deployment.
    Hash {
        /// Resource identifier.
        resource: String,

        /// Action path, e.g. `100/200/fit`.
        #[arg(long, default_value = "original")]
        action: String,
    },

    /// Print the config file path that is read when --config is not given.
    ConfigPath,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let load_config = || -> Result<DarkroomConfig> {
            let mut cfg = config::load(cli.config.as_deref())?;
            cfg.apply_overrides(&cli.hosts, cli.salt.as_deref());
            tracing::debug!(
                hosts = cfg.hosts.as_ref().map(|h| h.to_vec().len()).unwrap_or(0),
                "loaded config"
            );
            Ok(cfg)
        };

        match cli.command {
            CliCommand::Url {
                resources,
                transform,
            } => run_url(&load_config()?.factory()?, &resources, &transform)?,
            CliCommand::Info { resource } => run_info(&load_config()?.factory()?, &resource)?,
            CliCommand::Hash { resource, action } => {
                run_hash(load_config()?.salt()?, &resource, &action)?
            }
            CliCommand::ConfigPath => run_config_path()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
