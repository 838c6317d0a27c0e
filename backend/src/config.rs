//! # Server Configuration
//!
//! All settings come from `WATCHPLANNER_*` environment variables and have
//! defaults, so a bare `watchplanner` invocation serves on `127.0.0.1:8080`
//! with anonymous-only access.
//!
//! | Variable                          | Default     |
//! |-----------------------------------|-------------|
//! | `WATCHPLANNER_HOST`               | `127.0.0.1` |
//! | `WATCHPLANNER_PORT`               | `8080`      |
//! | `WATCHPLANNER_PLUGIN_DATA_DIR`    | unset       |
//! | `WATCHPLANNER_APP_DATA_DIR`       | platform data dir |
//! | `WATCHPLANNER_USERS_FILE`         | unset       |
//! | `WATCHPLANNER_MAX_PAYLOAD`        | `1048576`   |
//! | `WATCHPLANNER_SECTION_DELAY_SECS` | `5`         |

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_PAYLOAD: usize = 1024 * 1024;
const DEFAULT_SECTION_DELAY_SECS: u64 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
    #[error("could not read users file {path}: {source}")]
    UsersFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("users file {path} is not valid JSON: {source}")]
    UsersJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Host-provided plugin data directory. Preferred location for the preset.
    pub plugin_data_dir: Option<PathBuf>,
    /// Host application data directory, used when no plugin directory is set.
    pub app_data_dir: Option<PathBuf>,
    /// JSON file describing the users allowed to call the API.
    pub users_file: Option<PathBuf>,
    /// Upper bound on a preset write body, in bytes.
    pub max_payload: usize,
    /// Delay before the home section is registered with the host.
    pub section_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            plugin_data_dir: None,
            app_data_dir: None,
            users_file: None,
            max_payload: DEFAULT_MAX_PAYLOAD,
            section_delay: Duration::from_secs(DEFAULT_SECTION_DELAY_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        Ok(Config {
            host: get("WATCHPLANNER_HOST").unwrap_or(defaults.host),
            port: parse_or("WATCHPLANNER_PORT", get("WATCHPLANNER_PORT"), defaults.port)?,
            plugin_data_dir: get("WATCHPLANNER_PLUGIN_DATA_DIR").map(PathBuf::from),
            app_data_dir: get("WATCHPLANNER_APP_DATA_DIR").map(PathBuf::from),
            users_file: get("WATCHPLANNER_USERS_FILE").map(PathBuf::from),
            max_payload: parse_or(
                "WATCHPLANNER_MAX_PAYLOAD",
                get("WATCHPLANNER_MAX_PAYLOAD"),
                defaults.max_payload,
            )?,
            section_delay: Duration::from_secs(parse_or(
                "WATCHPLANNER_SECTION_DELAY_SECS",
                get("WATCHPLANNER_SECTION_DELAY_SECS"),
                DEFAULT_SECTION_DELAY_SECS,
            )?),
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
