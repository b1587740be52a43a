//! Server configuration: defaults, optional TOML file, then CLI/env overrides.

use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Server configuration (TOML).
///
/// Missing fields default to values suitable for a single local deployment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the listener to.
    pub bind: String,

    /// Port to listen on.
    pub port: u16,

    /// CSV file holding the habit collection.
    pub data_path: PathBuf,

    /// Directory of static UI files served in place of the embedded page.
    pub ui_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 4000,
            data_path: PathBuf::from("data/habits.csv"),
            ui_dir: None,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(anyhow!("port must be > 0"));
        }
        if self.data_path.as_os_str().is_empty() {
            return Err(anyhow!("data_path must not be empty"));
        }
        self.bind
            .parse::<IpAddr>()
            .map_err(|_| anyhow!("bind '{}' is not an IP address", self.bind))?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind
            .parse()
            .with_context(|| format!("parse bind address {}", self.bind))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub data_path: Option<PathBuf>,
    pub ui_dir: Option<PathBuf>,
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ServerConfig::default()`.
pub fn load_config(path: &Path) -> Result<ServerConfig> {
    if !path.exists() {
        let cfg = ServerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ServerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Apply command-line overrides to the base config.
pub fn apply_overrides(mut base: ServerConfig, overrides: &Overrides) -> Result<ServerConfig> {
    if let Some(bind) = &overrides.bind {
        base.bind = bind.clone();
    }
    if let Some(port) = overrides.port {
        base.port = port;
    }
    if let Some(data_path) = &overrides.data_path {
        base.data_path = data_path.clone();
    }
    if let Some(ui_dir) = &overrides.ui_dir {
        base.ui_dir = Some(ui_dir.clone());
    }
    base.validate()?;
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, ServerConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("habits.toml");
        fs::write(&path, "port = 8080\ndata_path = \"/srv/habits.csv\"\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.data_path, PathBuf::from("/srv/habits.csv"));
        assert_eq!(cfg.bind, "0.0.0.0");
    }

    #[test]
    fn rejects_zero_port() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("habits.toml");
        fs::write(&path, "port = 0\n").expect("write");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn overrides_win_over_base() {
        let overrides = Overrides {
            port: Some(5050),
            bind: Some("127.0.0.1".to_string()),
            ..Overrides::default()
        };
        let cfg = apply_overrides(ServerConfig::default(), &overrides).expect("merge");
        assert_eq!(cfg.socket_addr().expect("addr").to_string(), "127.0.0.1:5050");
        assert_eq!(cfg.data_path, PathBuf::from("data/habits.csv"));
    }

    #[test]
    fn invalid_bind_override_is_rejected() {
        let overrides = Overrides {
            bind: Some("not an ip".to_string()),
            ..Overrides::default()
        };
        assert!(apply_overrides(ServerConfig::default(), &overrides).is_err());
    }
}
