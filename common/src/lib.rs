//! Types shared between the watch planner server and its clients.
//!
//! - `model`: the persisted preset document and the week grid helpers used to
//!   mutate it.
//! - `responses`: the small JSON bodies returned by the HTTP endpoints.

pub mod model;
pub mod responses;
