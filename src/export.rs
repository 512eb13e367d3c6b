//! Board PNG Export
//!
//! Rasterizes the board onto an offscreen canvas and triggers a local
//! file download. Item images are preloaded with `crossOrigin =
//! "anonymous"` so drawing them does not taint the canvas; an item whose
//! image fails to load falls back to a name card. One-shot, no retry;
//! failures surface through the caller.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement, HtmlImageElement};

use crate::color::hex_to_rgba;
use crate::config;
use crate::models::{BoardItem, Tier};

const BOARD_W: f64 = 1200.0;
const LABEL_W: f64 = 160.0;
const CARD_W: f64 = 104.0;
const CARD_H: f64 = 64.0;
const GAP: f64 = 10.0;
const ROW_MIN_H: f64 = 96.0;

/// Height of a row holding `count` cards, cards wrapping like the live
/// board does.
fn row_height(count: usize) -> f64 {
    let per_row = ((BOARD_W - LABEL_W - GAP) / (CARD_W + GAP)).floor().max(1.0) as usize;
    let rows = count.div_ceil(per_row).max(1);
    (rows as f64 * (CARD_H + GAP) + GAP).max(ROW_MIN_H)
}

async fn load_image(url: &str) -> Option<HtmlImageElement> {
    let img = HtmlImageElement::new().ok()?;
    img.set_cross_origin(Some("anonymous"));
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(url);
    JsFuture::from(loaded).await.ok()?;
    Some(img)
}

/// Draw the board and download it as `tierlist_{id}.png`.
pub async fn export_board_png(
    tierlist_id: u32,
    tiers: Vec<Tier>,
    items: Vec<BoardItem>,
) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;

    // Preload every thumbnail; a failed load just means a name card.
    let mut thumbs: HashMap<u32, HtmlImageElement> = HashMap::new();
    for entry in &items {
        if let Some(path) = entry.item.thumb_path() {
            if let Some(img) = load_image(&config::image_url(path)).await {
                thumbs.insert(entry.item.id, img);
            }
        }
    }

    // One bucket per tier plus the unassigned strip at the bottom.
    let buckets: Vec<(Option<u32>, String, String)> = tiers
        .iter()
        .map(|t| (Some(t.id), t.name.clone(), t.colour.clone()))
        .chain(std::iter::once((None, "Unassigned".to_string(), "#555555".to_string())))
        .collect();

    let heights: Vec<f64> = buckets
        .iter()
        .map(|(bucket, _, _)| row_height(crate::board::items_in(&items, *bucket).len()))
        .collect();
    let total_h: f64 = heights.iter().sum();

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| "canvas creation failed")?
        .dyn_into()
        .map_err(|_| "canvas creation failed")?;
    canvas.set_width(BOARD_W as u32);
    canvas.set_height(total_h as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| "2d context unavailable")?
        .ok_or("2d context unavailable")?
        .dyn_into()
        .map_err(|_| "2d context unavailable")?;

    ctx.set_fill_style_str("#15151d");
    ctx.fill_rect(0.0, 0.0, BOARD_W, total_h);

    let mut y = 0.0;
    for ((bucket, name, colour), height) in buckets.iter().zip(&heights) {
        // Row tint and solid label column in the tier colour.
        ctx.set_fill_style_str(&hex_to_rgba(colour, 0.12));
        ctx.fill_rect(0.0, y, BOARD_W, *height);
        ctx.set_fill_style_str(colour);
        ctx.fill_rect(0.0, y, LABEL_W, *height);

        ctx.set_fill_style_str("#ffffff");
        ctx.set_font("bold 18px sans-serif");
        ctx.fill_text(name, 12.0, y + 26.0).map_err(|_| "text draw failed")?;

        let per_row = ((BOARD_W - LABEL_W - GAP) / (CARD_W + GAP)).floor().max(1.0) as usize;
        for (i, entry) in crate::board::items_in(&items, *bucket).iter().enumerate() {
            let col = i % per_row;
            let row = i / per_row;
            let x = LABEL_W + GAP + col as f64 * (CARD_W + GAP);
            let cy = y + GAP + row as f64 * (CARD_H + GAP);

            if let Some(img) = thumbs.get(&entry.item.id) {
                ctx.draw_image_with_html_image_element_and_dw_and_dh(img, x, cy, CARD_W, CARD_H)
                    .map_err(|_| "image draw failed")?;
            } else {
                ctx.set_fill_style_str("#2a2a36");
                ctx.fill_rect(x, cy, CARD_W, CARD_H);
                ctx.set_fill_style_str("#e8e8f0");
                ctx.set_font("12px sans-serif");
                let label = truncate_label(&entry.item.name, 14);
                ctx.fill_text(&label, x + 6.0, cy + CARD_H / 2.0)
                    .map_err(|_| "text draw failed")?;
            }
        }

        y += height;
    }

    let url = canvas
        .to_data_url_with_type("image/png")
        .map_err(|_| "rasterization failed")?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "download link failed")?
        .dyn_into()
        .map_err(|_| "download link failed")?;
    anchor.set_href(&url);
    anchor.set_download(&format!("tierlist_{tierlist_id}.png"));
    anchor.click();
    Ok(())
}

fn truncate_label(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        name.to_string()
    } else {
        let head: String = name.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rows_keep_their_minimum_height() {
        assert_eq!(row_height(0), ROW_MIN_H);
        assert_eq!(row_height(1), ROW_MIN_H);
    }

    #[test]
    fn full_rows_wrap() {
        let per_row = ((BOARD_W - LABEL_W - GAP) / (CARD_W + GAP)).floor() as usize;
        assert!(row_height(per_row + 1) > row_height(per_row));
    }

    #[test]
    fn labels_truncate_with_ellipsis() {
        assert_eq!(truncate_label("Snail", 14), "Snail");
        assert_eq!(truncate_label("A very distinguished snail", 14), "A very distin…");
    }
}
