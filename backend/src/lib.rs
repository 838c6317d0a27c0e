//! # Watch Planner Server
//!
//! Server side of the watch planner home screen section: one weekly schedule
//! shared by every user of a media server, readable by all authenticated users
//! and editable by administrators.
//!
//! - `store`: crash-safe persistence of the schedule document.
//! - `services`: the HTTP routes (`/plugins/watchplanner/...`).
//! - `host`: traits through which the hosting media server provides paths,
//!   caller identity and home screen registration.
//! - `config`: environment driven settings for the standalone binary.

pub mod config;
pub mod host;
pub mod services;
pub mod store;

use crate::config::{Config, ConfigError};
use crate::host::identity::{IdentityProvider, TokenIdentityProvider};
use crate::host::paths::ConfiguredPaths;
use crate::store::PresetStore;
use actix_web::web;
use log::{info, warn};
use std::sync::Arc;

/// Shared application data handed to every worker.
#[derive(Clone)]
pub struct AppState {
    pub store: web::Data<PresetStore>,
    pub identity: web::Data<dyn IdentityProvider>,
    pub payload: web::PayloadConfig,
}

impl AppState {
    pub fn new(store: PresetStore, identity: Arc<dyn IdentityProvider>, max_payload: usize) -> Self {
        AppState {
            store: web::Data::new(store),
            identity: web::Data::from(identity),
            payload: web::PayloadConfig::new(max_payload),
        }
    }

    /// Resolves storage and loads the users file described by `config`.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let store = PresetStore::new(&ConfiguredPaths::from_config(config));
        let identity = match &config.users_file {
            Some(path) => {
                let provider = TokenIdentityProvider::from_file(path)?;
                info!("[watchplanner] loaded {} user(s) from {}", provider.len(), path.display());
                provider
            }
            None => {
                warn!("[watchplanner] no users file configured, every request is anonymous");
                TokenIdentityProvider::default()
            }
        };
        Ok(Self::new(store, Arc::new(identity), config.max_payload))
    }

    /// Installs the app data and every plugin route on a service config.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.store.clone())
            .app_data(self.identity.clone())
            .app_data(self.payload.clone())
            .service(services::configure_routes())
            .service(services::plugin::ping_routes());
    }
}
