//! `darkroom-url config-path`

use anyhow::Result;

use crate::config;

pub fn run_config_path() -> Result<()> {
    println!("{}", config::config_path()?.display());
    Ok(())
}
