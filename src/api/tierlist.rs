//! Tierlist Calls

use serde::Serialize;

use crate::models::{TierDraft, TierlistDetail, TierlistSummary};

#[derive(Serialize)]
struct CreateTierlistBody<'a> {
    name: &'a str,
    tiers: &'a [TierDraft],
}

pub async fn list() -> Result<Vec<TierlistSummary>, String> {
    let resp = super::get("/tierlists").send().await.map_err(|e| e.to_string())?;
    super::read_json(resp, "list tierlists").await
}

pub async fn detail(id: u32) -> Result<TierlistDetail, String> {
    let resp = super::get(&format!("/tierlists/{id}"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    super::read_json(resp, "load tierlist").await
}

/// Create the tierlist and its tier definitions in one request.
pub async fn create(name: &str, tiers: &[TierDraft]) -> Result<TierlistSummary, String> {
    let body = CreateTierlistBody { name, tiers };
    let resp = super::post("/tierlists")
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    super::read_json(resp, "create tierlist").await
}
