//! # Plugin Service Module
//!
//! Routes that describe the plugin and ship its web client, independent of the
//! stored schedule. None of them require authentication.
//!
//! ## Sub-modules:
//! - `ping`: liveness check.
//! - `info`: plugin metadata.
//! - `assets`: the embedded client script(s) the home screen loads.

mod assets;
mod info;
mod ping;

use actix_web::web::{get, scope, ServiceConfig};
use actix_web::Scope;

/// Base path of the liveness route, outside the `/plugins` tree.
const PING_API_PATH: &str = "/watchplanner";

/// Registers the metadata and asset routes inside the plugin scope.
///
/// # Registered Routes:
///
/// *   **`GET /info`**: id, name, description and version.
/// *   **`GET /client.js`**: the loader that mounts the planner into the home screen.
/// *   **`GET /web/{file}`**: any embedded asset by name, `404` when unknown.
pub fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("/info", get().to(info::process))
        .route("/client.js", get().to(assets::client))
        .route("/web/{file:.*}", get().to(assets::process));
}

/// Returns the `/watchplanner` scope holding `GET /ping` (`{"ok":true}`).
pub fn ping_routes() -> Scope {
    scope(PING_API_PATH).route("/ping", get().to(ping::process))
}
