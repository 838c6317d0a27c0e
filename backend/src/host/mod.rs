//! # Host Collaborators
//!
//! The media server that loads this plugin owns paths, authentication and home
//! screen composition. Each of those facilities is reached through a small trait
//! so the rest of the crate never depends on how the host provides it:
//!
//! - `paths`: where the plugin may keep its data (`HostPaths`).
//! - `identity`: who is calling and whether they are an administrator
//!   (`IdentityProvider`, `Principal`).
//! - `section`: the extension point the watch planner registers its home
//!   screen section against (`SectionRegistry`).

pub mod identity;
pub mod paths;
pub mod section;
