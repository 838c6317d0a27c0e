//! # Preset Service Module
//!
//! HTTP surface over the `PresetStore`. Reading is open to every authenticated
//! user, writing is reserved to administrators.
//!
//! ## Sub-modules:
//! - `get`: returns the stored document verbatim.
//! - `save`: replaces the stored document with the request body.

mod get;
mod save;

use actix_web::web::{self, get, post, ServiceConfig};

/// Canonical path of the preset resource, relative to the plugin scope.
pub const API_PATH: &str = "/presets";
/// Singular spelling used by older web clients.
pub const LEGACY_API_PATH: &str = "/preset";

/// Registers the preset routes on both `API_PATH` and `LEGACY_API_PATH`.
///
/// # Registered Routes:
///
/// *   **`GET`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns the stored preset as `application/json`, or
///       `{"serverWeekGrid":{}}` when nothing was saved yet. Anonymous callers get
///       `401` rather than the `403` used on write: reading only needs a session,
///       the same way the host answers an unauthenticated `[Authorize]` route.
///
/// *   **`POST`**:
///     - **Handler**: `save::process`
///     - **Description**: Stores the raw request body as the new preset. The body
///       is not validated against the grid schema. `403` for every caller that is
///       not an administrator (anonymous included) before the body is read, `413`
///       for an oversized body, `400` for an empty one, `500` if the write fails.
pub fn configure_routes(cfg: &mut ServiceConfig) {
    for path in [API_PATH, LEGACY_API_PATH] {
        cfg.service(
            web::resource(path)
                .route(get().to(get::process))
                .route(post().to(save::process)),
        );
    }
}
