//! `config.toml` plus command-line / environment overrides.

use anyhow::{bail, Context, Result};
use darkroom_core::{HostList, UrlBuilderFactory};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// `hosts` may be a single URL or an array of URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HostsSetting {
    One(String),
    Many(Vec<String>),
}

impl HostsSetting {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            HostsSetting::One(h) => vec![h.clone()],
            HostsSetting::Many(hs) => hs.clone(),
        }
    }
}

/// Configuration loaded from `~/.config/darkroom/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DarkroomConfig {
    /// Darkroom base URLs, used in round-robin order.
    #[serde(default)]
    pub hosts: Option<HostsSetting>,
    /// Shared secret configured on the darkroom service.
    #[serde(default)]
    pub salt: Option<String>,
}

impl DarkroomConfig {
    /// Replace file values with those given on the command line or env.
    /// An empty `hosts` slice keeps the configured hosts.
    pub fn apply_overrides(&mut self, hosts: &[String], salt: Option<&str>) {
        if !hosts.is_empty() {
            self.hosts = Some(HostsSetting::Many(hosts.to_vec()));
        }
        if let Some(salt) = salt {
            self.salt = Some(salt.to_string());
        }
    }

    pub fn salt(&self) -> Result<&str> {
        match self.salt.as_deref() {
            Some(s) if !s.is_empty() => Ok(s),
            _ => bail!("no salt configured; set `salt` in config.toml, pass --salt or DARKROOM_SALT"),
        }
    }

    pub fn factory(&self) -> Result<UrlBuilderFactory> {
        let hosts = self.hosts.as_ref().map(HostsSetting::to_vec).unwrap_or_default();
        let hosts = HostList::new(&hosts).with_context(|| {
            "no usable darkroom host configured; set `hosts` in config.toml or pass --host"
        })?;
        let factory = UrlBuilderFactory::with_hosts(hosts, self.salt()?)?;
        Ok(factory)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("darkroom")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

pub fn load_from(path: &Path) -> Result<DarkroomConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: DarkroomConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load `explicit` if given (it must exist), otherwise the XDG config file if
/// present, otherwise an empty config for overrides to fill.
pub fn load(explicit: Option<&Path>) -> Result<DarkroomConfig> {
    if let Some(path) = explicit {
        return load_from(path);
    }
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!("no config at {}, using overrides only", path.display());
        return Ok(DarkroomConfig::default());
    }
    load_from(&path)
}
