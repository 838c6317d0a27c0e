//! # Preset Storage
//!
//! On-disk persistence of the shared week schedule. See `preset::PresetStore`.

mod preset;

pub use preset::{resolve_storage_location, PresetStore, StoreError, PRESET_FILE_NAME, STORAGE_DIR_NAME};
