//! Frontend Models
//!
//! Data structures matching backend entities. The frontend holds
//! ephemeral, non-authoritative copies; the server owns all of them.

use serde::{Deserialize, Serialize};

/// Authenticated user (shape of `/auth/me`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
}

/// Tierlist summary row from `/tierlists`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierlistSummary {
    pub id: u32,
    pub name: String,
    pub creator_id: u32,
}

/// Tier data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub id: u32,
    pub tierlist_id: u32,
    pub name: String,
    pub colour: String,
    pub position: i32,
}

/// Tierlist detail from `/tierlists/{id}`, tiers included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierlistDetail {
    pub id: u32,
    pub name: String,
    pub creator_id: u32,
    pub tiers: Vec<Tier>,
}

/// Item data structure (matches backend). `tier_id = None` means the item
/// sits in the unassigned area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub tierlist_id: u32,
    pub tier_id: Option<u32>,
    pub name: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
}

/// Response of `POST /items/{id}/vote`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteResponse {
    pub status: String,
    pub item_id: u32,
    pub tier_id: u32,
    pub user_id: String,
}

impl Item {
    /// Render path for thumbnails: the server-generated preview when one
    /// exists, else the original upload.
    pub fn thumb_path(&self) -> Option<&str> {
        self.preview_url.as_deref().or(self.image_url.as_deref())
    }
}

/// Client-only tier row in the creation form, before the backend has
/// assigned identity or position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierDraft {
    pub name: String,
    pub colour: String,
}

/// Item plus its transient voting flag. Never persisted, reset on reload.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardItem {
    pub item: Item,
    pub voting: bool,
}

impl BoardItem {
    pub fn new(item: Item) -> Self {
        Self { item, voting: false }
    }
}

#[cfg(test)]
mod tests {
    use super::Item;

    #[test]
    fn thumb_prefers_preview_over_original() {
        let mut item = Item {
            id: 1,
            tierlist_id: 1,
            tier_id: None,
            name: "Snail".to_string(),
            image_url: Some("/uploads/full.png".to_string()),
            preview_url: Some("/uploads/thumb.png".to_string()),
        };
        assert_eq!(item.thumb_path(), Some("/uploads/thumb.png"));

        item.preview_url = None;
        assert_eq!(item.thumb_path(), Some("/uploads/full.png"));

        item.image_url = None;
        assert_eq!(item.thumb_path(), None);
    }
}
