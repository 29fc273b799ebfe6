//! Configuration for name services, endpoints, and the local workspace.
//!
//! Loaded once from `$HDFS_CONF_DIR/config.json` (default `~/.hdfs/config.json`,
//! overridable file name via `$HDFS_CONF_FILE`). A missing or invalid file
//! degrades to defaults with a warning; the core only ever reads from this
//! structure.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable pointing at the configuration directory.
pub const CONF_DIR_ENV: &str = "HDFS_CONF_DIR";
/// Environment variable overriding the configuration file name.
pub const CONF_FILE_ENV: &str = "HDFS_CONF_FILE";
/// Default configuration file name inside the configuration directory.
pub const CONF_FILE: &str = "config.json";

/// Default WebHDFS namenode port.
pub const DEFAULT_WEBHDFS_PORT: u16 = 50070;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name service -> ordered list of candidate namenode hosts.
    pub web_hdfs_nodes: HashMap<String, Vec<String>>,

    /// Name service used when a path carries none. May be absent; executors
    /// treat an unresolvable name service as an error.
    pub default_name_service: Option<String>,

    /// Local directory that relative `-get`/`-put` paths resolve under.
    /// Defaults to `/home/<user>/workspace`.
    pub user_workspace: Option<String>,

    /// Port appended to each configured namenode host.
    pub webhdfs_port: u16,

    /// Sleep schedule (seconds) applied between transport-level retries.
    pub retry_seconds_to_sleep_list: Vec<f64>,

    /// Extra headers attached to every WebHDFS request (for example a
    /// delegation token). This is where authentication material travels.
    pub custom_headers: HashMap<String, String>,

    /// Accept invalid TLS certificates when talking to the cluster.
    pub ignore_ssl_errors: bool,

    /// Optional `user.name` query parameter sent with every request.
    pub user_name: Option<String>,

    /// Default log directive when `RUST_LOG` is unset (e.g. `"info"` or
    /// `"hdfsh=debug"`).
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            web_hdfs_nodes: HashMap::new(),
            default_name_service: None,
            user_workspace: None,
            webhdfs_port: DEFAULT_WEBHDFS_PORT,
            retry_seconds_to_sleep_list: vec![0.2, 0.5, 1.0, 3.0, 5.0],
            custom_headers: HashMap::new(),
            ignore_ssl_errors: false,
            user_name: None,
            log_level: None,
        }
    }
}

impl Config {
    /// Load configuration from the conventional location.
    pub fn load() -> Self {
        Self::load_from_path(&config_file_path())
    }

    /// Load configuration from a specific path. Returns defaults if the
    /// file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("[hdfsh][warn] Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[hdfsh][warn] Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// All name services known to this configuration.
    pub fn name_services(&self) -> Vec<&str> {
        self.web_hdfs_nodes.keys().map(String::as_str).collect()
    }

    /// Name service to fall back to when a path carries none. Empty string
    /// when unconfigured; callers must treat that as unresolved.
    pub fn default_name_service(&self) -> &str {
        self.default_name_service.as_deref().unwrap_or("")
    }

    /// Candidate namenode hosts for a name service.
    pub fn nodes(&self, name_service: &str) -> Option<&[String]> {
        self.web_hdfs_nodes
            .get(name_service)
            .map(Vec::as_slice)
            .filter(|nodes| !nodes.is_empty())
    }

    /// Local workspace directory that relative local paths resolve under.
    pub fn workspace(&self) -> PathBuf {
        match &self.user_workspace {
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(format!("/home/{}/workspace", current_user())),
        }
    }
}

/// Name of the OS user running the shell. Used for the trash location and
/// the default workspace.
pub fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}

fn config_file_path() -> PathBuf {
    let dir = match std::env::var(CONF_DIR_ENV) {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hdfs"),
    };
    let file = std::env::var(CONF_FILE_ENV).unwrap_or_else(|_| CONF_FILE.to_string());
    dir.join(file)
}
