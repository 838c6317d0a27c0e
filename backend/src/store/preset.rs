//! # Preset Store
//!
//! Owns the one `preset.json` file of a deployment. The document is treated as
//! opaque UTF-8 text: it is returned exactly as written and never parsed here.
//!
//! ## Guarantees
//!
//! - **Reads never fail.** A missing, unreadable, non-UTF-8 or blank file reads
//!   as `DEFAULT_PRESET`. Nothing is created on disk by a read.
//! - **Writes never tear.** Each write goes to its own temporary sibling
//!   (`preset.json.<uuid>.tmp`), is flushed and synced, then renamed over the
//!   target. A reader sees either the previous document or the new one.
//!   Concurrent writers each own their temporary file, so the last rename wins.
//! - **Failed writes keep the old document.** If the temporary file cannot be
//!   created or written the target is never touched. Only when the final
//!   rename fails does the store fall back to overwriting the target in place.
//! - Temporary files are removed whether or not the write succeeded.
//!
//! There is no cache and no lock: every call goes to the filesystem.

use crate::host::paths::HostPaths;
use common::model::preset::DEFAULT_PRESET;
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const STORAGE_DIR_NAME: &str = "watchplanner";
pub const PRESET_FILE_NAME: &str = "preset.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("refusing to store an empty preset")]
    EmptyPayload,
    #[error("preset i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Moves a finished temporary file over the target. `atomic_rename` in production.
type ReplaceFn = fn(&Path, &Path) -> io::Result<()>;

#[derive(Debug, Clone)]
pub struct PresetStore {
    dir: PathBuf,
    path: PathBuf,
}

impl PresetStore {
    /// Resolves the storage directory once through `paths` and keeps it for
    /// the lifetime of the store.
    pub fn new(paths: &dyn HostPaths) -> Self {
        let dir = resolve_storage_location(paths);
        info!("[watchplanner] preset storage: {}", dir.display());
        Self::open(dir, PRESET_FILE_NAME)
    }

    /// Store for `file_name` inside an explicit directory, created if absent.
    pub fn open(dir: impl Into<PathBuf>, file_name: &str) -> Self {
        let dir = dir.into();
        if let Err(e) = fs::create_dir_all(&dir) {
            warn!("[watchplanner] could not create {}: {}", dir.display(), e);
        }
        let path = dir.join(file_name);
        PresetStore { dir, path }
    }

    pub fn directory(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current document text, or `DEFAULT_PRESET` when there is nothing usable.
    pub fn read(&self) -> String {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => {
                debug!("[watchplanner] {} is blank", self.path.display());
                DEFAULT_PRESET.to_string()
            }
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => DEFAULT_PRESET.to_string(),
            Err(e) => {
                warn!("[watchplanner] error reading {}: {}", self.path.display(), e);
                DEFAULT_PRESET.to_string()
            }
        }
    }

    /// Replaces the document with `text`.
    ///
    /// Blank input is rejected with `StoreError::EmptyPayload` before any
    /// filesystem access.
    pub fn write(&self, text: &str) -> Result<(), StoreError> {
        self.write_with(text, atomic_rename)
    }

    /// `write` with the final temp-to-target step supplied by the caller.
    fn write_with(&self, text: &str, replace: ReplaceFn) -> Result<(), StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyPayload);
        }

        let tmp = self.temp_path();
        let result = self.replace_with(&tmp, text, replace);

        match fs::remove_file(&tmp) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("[watchplanner] could not remove {}: {}", tmp.display(), e),
        }
        result
    }

    fn replace_with(&self, tmp: &Path, text: &str, replace: ReplaceFn) -> Result<(), StoreError> {
        write_synced(tmp, text)?;

        if let Err(e) = replace(tmp, &self.path) {
            warn!(
                "[watchplanner] atomic replace of {} failed ({}), overwriting in place",
                self.path.display(),
                e
            );
            fs::write(&self.path, text)?;
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(PRESET_FILE_NAME);
        self.dir
            .join(format!("{}.{}.tmp", file_name, uuid::Uuid::new_v4()))
    }
}

fn atomic_rename(from: &Path, to: &Path) -> io::Result<()> {
    fs::rename(from, to)
}

fn write_synced(path: &Path, text: &str) -> io::Result<()> {
    let mut file = File::options().write(true).create_new(true).open(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    file.sync_all()
}

/// Picks the directory holding the preset: the host plugin data directory,
/// then the host application data directory, then `<temp>/watchplanner`.
///
/// Each candidate gets a `watchplanner` subdirectory, created on the spot; a
/// candidate that cannot be created is skipped. Never fails: if even the last
/// fallback cannot be created its path is still returned.
pub fn resolve_storage_location(paths: &dyn HostPaths) -> PathBuf {
    resolve_with_fallback(paths, fallback_dir())
}

/// Process-local directory used when the host offers no usable location.
fn fallback_dir() -> PathBuf {
    std::env::temp_dir().join(STORAGE_DIR_NAME)
}

fn resolve_with_fallback(paths: &dyn HostPaths, fallback: PathBuf) -> PathBuf {
    let candidates = [paths.plugin_data_dir(), paths.application_data_dir()]
        .into_iter()
        .flatten()
        .map(|base| base.join(STORAGE_DIR_NAME));

    for dir in candidates {
        match fs::create_dir_all(&dir) {
            Ok(()) => return dir,
            Err(e) => warn!("[watchplanner] skipping storage dir {}: {}", dir.display(), e),
        }
    }

    if let Err(e) = fs::create_dir_all(&fallback) {
        warn!(
            "[watchplanner] fallback storage dir {} unavailable: {}",
            fallback.display(),
            e
        );
    }
    fallback
}
