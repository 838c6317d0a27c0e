//! # Plugin Routes
//!
//! Everything the plugin contributes to the host lives under `API_PATH`, apart
//! from the `/watchplanner/ping` liveness route.

pub mod plugin;
pub mod presets;

use actix_web::web::scope;
use actix_web::Scope;

/// The base path for all plugin endpoints.
pub const API_PATH: &str = "/plugins/watchplanner";

/// Configures and returns the Actix `Scope` for the plugin routes.
///
/// # Registered Routes:
///
/// *   **`GET|POST /presets`**, **`GET|POST /preset`**: see `presets::configure_routes`.
/// *   **`GET /info`**, **`GET /client.js`**, **`GET /web/{file}`**: see
///     `plugin::configure_routes`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .configure(presets::configure_routes)
        .configure(plugin::configure_routes)
}
