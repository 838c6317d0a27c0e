use serde::{Deserialize, Serialize};

/// A series placed on one day of the week grid.
///
/// Field names follow the host catalog's PascalCase DTOs so entries can be
/// built straight from a search result and read back by the web client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Catalog item id. Unique within a day.
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ServerId", default, skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
    /// Thumbnail URL or image tag.
    #[serde(rename = "ThumbUrl", default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
}

/// Compact shape of a host catalog search hit (`IncludeItemTypes=Series`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(rename = "ServerId", default, skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
    #[serde(rename = "ThumbUrl", default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
}

impl From<CatalogItem> for ScheduleEntry {
    fn from(item: CatalogItem) -> Self {
        ScheduleEntry {
            id: item.id,
            name: item.name,
            server_id: item.server_id,
            thumb_url: item.thumb_url,
        }
    }
}
