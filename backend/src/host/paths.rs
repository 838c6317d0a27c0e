use crate::config::Config;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Directory lookup offered by the host. `None` means the host could not,
/// or would not, provide that location.
pub trait HostPaths {
    fn plugin_data_dir(&self) -> Option<PathBuf>;
    fn application_data_dir(&self) -> Option<PathBuf>;
}

/// `HostPaths` backed by the server configuration.
///
/// When no application data directory is configured, the platform data
/// directory of the media server is used (e.g. `~/.local/share/jellyfin`).
#[derive(Debug, Clone, Default)]
pub struct ConfiguredPaths {
    plugin_data_dir: Option<PathBuf>,
    application_data_dir: Option<PathBuf>,
}

impl ConfiguredPaths {
    pub fn new(plugin_data_dir: Option<PathBuf>, application_data_dir: Option<PathBuf>) -> Self {
        ConfiguredPaths {
            plugin_data_dir,
            application_data_dir,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let application_data_dir = config.app_data_dir.clone().or_else(|| {
            ProjectDirs::from("org", "jellyfin", "jellyfin").map(|dirs| dirs.data_dir().to_path_buf())
        });
        ConfiguredPaths::new(config.plugin_data_dir.clone(), application_data_dir)
    }
}

impl HostPaths for ConfiguredPaths {
    fn plugin_data_dir(&self) -> Option<PathBuf> {
        self.plugin_data_dir.clone()
    }

    fn application_data_dir(&self) -> Option<PathBuf> {
        self.application_data_dir.clone()
    }
}
