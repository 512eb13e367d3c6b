//! Item Calls
//!
//! Tier assignment (drag) and voting are independent write paths against
//! the same item-tier relationship; both stay single-request.

use serde::Serialize;
use web_sys::FormData;

use crate::models::{Item, VoteResponse};

#[derive(Serialize)]
struct SetTierBody {
    tier_id: Option<u32>,
}

#[derive(Serialize)]
struct VoteBody {
    tier_id: u32,
}

pub async fn list(tierlist_id: u32) -> Result<Vec<Item>, String> {
    let resp = super::get(&format!("/tierlists/{tierlist_id}/items"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    super::read_json(resp, "list items").await
}

/// Persist a drag result. `tier_id = None` parks the item as unassigned.
pub async fn set_tier(item_id: u32, tier_id: Option<u32>) -> Result<Item, String> {
    let resp = super::patch(&format!("/items/{item_id}"))
        .json(&SetTierBody { tier_id })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    super::read_json(resp, "move item").await
}

pub async fn vote(item_id: u32, tier_id: u32) -> Result<VoteResponse, String> {
    let resp = super::post(&format!("/items/{item_id}/vote"))
        .json(&VoteBody { tier_id })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    super::read_json(resp, "vote").await
}

/// Upload a new item as multipart form data (`name` optional, `image`
/// required). The browser sets the multipart boundary itself.
pub async fn add(tierlist_id: u32, form: FormData) -> Result<Item, String> {
    let resp = super::post(&format!("/tierlists/{tierlist_id}/items"))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    super::read_json(resp, "add item").await
}
