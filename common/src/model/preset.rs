//! # Preset Document
//!
//! The single, global week schedule shared by every user of the server:
//!
//! ```json
//! { "serverWeekGrid": { "Mon": [ { "Id": "abc", "Name": "Show A" } ], "Tue": [] } }
//! ```
//!
//! The server stores this document as opaque text and never parses it. These
//! types exist for the component that edits the grid: it decodes the document,
//! applies `add_entry` / `remove_entry` / `clear_day`, and posts the result back.
//! Keys outside the seven weekday labels, and top-level fields other than
//! `serverWeekGrid`, survive a decode/encode cycle untouched but are never
//! created by the helpers.

use super::schedule::ScheduleEntry;
use super::weekday::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Text returned when nothing has been saved yet. Writing it back is how a
/// schedule is reset.
pub const DEFAULT_PRESET: &str = r#"{"serverWeekGrid":{}}"#;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetDocument {
    #[serde(rename = "serverWeekGrid", default)]
    pub server_week_grid: BTreeMap<String, Vec<ScheduleEntry>>,
    /// Any other top-level settings the client keeps next to the grid.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PresetDocument {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Entries scheduled on `day`, in display order.
    pub fn entries(&self, day: Weekday) -> &[ScheduleEntry] {
        self.server_week_grid
            .get(day.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Appends `entry` to `day` unless a series with the same id is already
    /// there. Returns `true` when the entry was added.
    pub fn add_entry(&mut self, day: Weekday, entry: ScheduleEntry) -> bool {
        let slot = self
            .server_week_grid
            .entry(day.as_str().to_string())
            .or_default();
        if slot.iter().any(|existing| existing.id == entry.id) {
            return false;
        }
        slot.push(entry);
        true
    }

    /// Removes the series `id` from `day`. Returns `true` if something was removed.
    pub fn remove_entry(&mut self, day: Weekday, id: &str) -> bool {
        match self.server_week_grid.get_mut(day.as_str()) {
            Some(slot) => {
                let before = slot.len();
                slot.retain(|existing| existing.id != id);
                slot.len() != before
            }
            None => false,
        }
    }

    pub fn clear_day(&mut self, day: Weekday) {
        if let Some(slot) = self.server_week_grid.get_mut(day.as_str()) {
            slot.clear();
        }
    }

    /// Grid keys that are not one of the seven weekday labels.
    pub fn unknown_days(&self) -> impl Iterator<Item = &str> {
        self.server_week_grid
            .keys()
            .map(String::as_str)
            .filter(|key| key.parse::<Weekday>().is_err())
    }
}
