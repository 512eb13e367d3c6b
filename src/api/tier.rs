//! Tier Calls

use serde::Serialize;

use crate::models::Tier;

#[derive(Serialize)]
struct CreateTierBody<'a> {
    name: &'a str,
    colour: &'a str,
}

/// Partial update; absent fields are left untouched by the backend.
#[derive(Serialize, Default)]
pub struct TierPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<&'a str>,
}

/// Tiers are created under their parent tierlist; the server assigns
/// the id and the next position.
fn create_path(tierlist_id: u32) -> String {
    format!("/tierlists/{tierlist_id}/tiers")
}

pub async fn create(tierlist_id: u32, name: &str, colour: &str) -> Result<Tier, String> {
    let body = CreateTierBody { name, colour };
    let resp = super::post(&create_path(tierlist_id))
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    super::read_json(resp, "create tier").await
}

pub async fn update(id: u32, patch: &TierPatch<'_>) -> Result<Tier, String> {
    let resp = super::patch(&format!("/tiers/{id}"))
        .json(patch)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    super::read_json(resp, "update tier").await
}

pub async fn delete(id: u32) -> Result<(), String> {
    let resp = super::delete(&format!("/tiers/{id}"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    super::read_status(&resp, "delete tier")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_creation_targets_the_parent_tierlist() {
        assert_eq!(create_path(42), "/tierlists/42/tiers");
        // The parent id rides in the path, not the body.
        let body = serde_json::to_value(CreateTierBody { name: "New Tier", colour: "#cccccc" })
            .expect("body serializes");
        assert_eq!(body, serde_json::json!({"name": "New Tier", "colour": "#cccccc"}));
    }

    #[test]
    fn tier_patch_omits_absent_fields() {
        let patch = TierPatch { name: Some("B-Tier"), colour: None };
        let body = serde_json::to_value(&patch).expect("patch serializes");
        assert_eq!(body, serde_json::json!({"name": "B-Tier"}));
    }
}
