//! Home screen section registration.
//!
//! The host composes its home screen from sections contributed by plugins.
//! The watch planner describes itself with a `SectionDescriptor` and hands it to
//! whatever `SectionRegistry` the host exposes. Registration is best effort: a
//! failure is logged and the HTTP surface keeps working without the section.

use log::{info, warn};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub const SECTION_ID: &str = "watchplanner";
pub const SECTION_TITLE: &str = "Watch Planner";
pub const CLIENT_SCRIPT_PATH: &str = "/plugins/watchplanner/client.js";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDescriptor {
    pub id: String,
    pub display_text: String,
    pub limit: u32,
    pub route: String,
    pub additional_data: String,
    /// Script the web client loads to mount the planner into the section.
    pub client_script: String,
}

impl Default for SectionDescriptor {
    fn default() -> Self {
        SectionDescriptor {
            id: SECTION_ID.to_string(),
            display_text: SECTION_TITLE.to_string(),
            limit: 1,
            route: String::new(),
            additional_data: String::new(),
            client_script: CLIENT_SCRIPT_PATH.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SectionError {
    #[error("section registry unavailable: {0}")]
    Unavailable(String),
    #[error("section '{0}' rejected: {1}")]
    Rejected(String, String),
}

/// Extension point owned by the component that composes the home screen.
pub trait SectionRegistry: Send + Sync {
    fn register(&self, descriptor: SectionDescriptor) -> Result<(), SectionError>;
}

/// Registry used when the server runs on its own: it only records the
/// descriptor in the log.
#[derive(Debug, Default)]
pub struct LoggingSectionRegistry;

impl SectionRegistry for LoggingSectionRegistry {
    fn register(&self, descriptor: SectionDescriptor) -> Result<(), SectionError> {
        let payload = serde_json::to_string(&descriptor)
            .map_err(|e| SectionError::Rejected(descriptor.id.clone(), e.to_string()))?;
        info!("[watchplanner] section payload: {}", payload);
        Ok(())
    }
}

/// Registers the watch planner section, logging instead of failing.
/// Returns whether the registry accepted it.
pub fn register_section(registry: &dyn SectionRegistry) -> bool {
    match registry.register(SectionDescriptor::default()) {
        Ok(()) => {
            info!("[watchplanner] section '{}' registered", SECTION_ID);
            true
        }
        Err(e) => {
            warn!("[watchplanner] section registration failed: {}", e);
            false
        }
    }
}

/// Spawns a task that registers the section after `delay`, giving the host
/// time to load the plugin that owns the home screen.
pub fn schedule_registration(
    registry: Arc<dyn SectionRegistry>,
    delay: Duration,
) -> tokio::task::JoinHandle<bool> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        register_section(registry.as_ref())
    })
}
