//! Default Tier Colours
//!
//! Gradient generator for tier rows: the top tier is a fixed wine red,
//! everything below interpolates along orange -> yellow -> green -> blue.

use crate::color::rgb_to_hex;
use crate::models::TierDraft;

/// Fixed colour of the top tier
pub const TOP_TIER_COLOUR: &str = "#7b112c";

/// Fallback when there is only one non-top tier (no interval to interpolate)
const SINGLE_TIER_COLOUR: &str = "#ffa500";

const ORANGE: [f64; 3] = [255.0, 165.0, 0.0];
const YELLOW: [f64; 3] = [255.0, 255.0, 0.0];
const GREEN: [f64; 3] = [0.0, 255.0, 0.0];
const BLUE: [f64; 3] = [0.0, 0.0, 255.0];

/// Colour of non-top tier `index` out of `total`, as `#rrggbb`.
///
/// The unit interval splits into three equal segments (orange->yellow,
/// yellow->green, green->blue); each channel interpolates linearly within
/// the active segment and rounds to the nearest integer.
pub fn gradient_colour(index: usize, total: usize) -> String {
    if total <= 1 {
        return SINGLE_TIER_COLOUR.to_string();
    }
    let t = index as f64 / (total - 1) as f64;

    let (start, end, local_t) = if t <= 1.0 / 3.0 {
        (ORANGE, YELLOW, t * 3.0)
    } else if t <= 2.0 / 3.0 {
        (YELLOW, GREEN, (t - 1.0 / 3.0) * 3.0)
    } else {
        (GREEN, BLUE, (t - 2.0 / 3.0) * 3.0)
    };

    let r = (start[0] + (end[0] - start[0]) * local_t).round() as u8;
    let g = (start[1] + (end[1] - start[1]) * local_t).round() as u8;
    let b = (start[2] + (end[2] - start[2]) * local_t).round() as u8;
    rgb_to_hex(r, g, b)
}

/// Seed rows for the creation form: fixed S-Tier plus six gradient tiers
/// named A-Tier through F-Tier.
pub fn default_tiers() -> Vec<TierDraft> {
    let mut result = vec![TierDraft {
        name: "S-Tier".to_string(),
        colour: TOP_TIER_COLOUR.to_string(),
    }];
    let gradient_count = 6;
    for i in 0..gradient_count {
        let letter = (b'A' + i as u8) as char;
        result.push(TierDraft {
            name: format!("{letter}-Tier"),
            colour: gradient_colour(i, gradient_count),
        });
    }
    result
}

/// Recolour every row from its current position: index 0 gets the fixed
/// top colour, the rest get the gradient. Runs after a row is added or
/// removed; manual colour overrides are intentionally clobbered here.
pub fn apply_gradient(tiers: &mut [TierDraft]) {
    if tiers.is_empty() {
        return;
    }
    let gradient_count = tiers.len() - 1;
    for (idx, tier) in tiers.iter_mut().enumerate() {
        if idx == 0 {
            tier.colour = TOP_TIER_COLOUR.to_string();
        } else {
            tier.colour = gradient_colour(idx - 1, gradient_count);
        }
    }
}

/// Remove the row at `idx` and recolour the remainder. Stale indices
/// are ignored rather than panicking.
pub fn remove_tier(tiers: &mut Vec<TierDraft>, idx: usize) {
    if idx < tiers.len() {
        tiers.remove(idx);
        apply_gradient(tiers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_hex_rgb;

    #[test]
    fn single_non_top_tier_is_orange() {
        assert_eq!(gradient_colour(0, 1), "#ffa500");
        assert_eq!(gradient_colour(0, 0), "#ffa500");
    }

    #[test]
    fn endpoints_are_orange_and_blue() {
        assert_eq!(gradient_colour(0, 6), "#ffa500");
        assert_eq!(gradient_colour(5, 6), "#0000ff");
    }

    #[test]
    fn default_seed_matches_known_sequence() {
        // The "Best Snails" default request body: wine-red top plus the
        // six-step orange-to-blue ramp in order.
        let tiers = default_tiers();
        let colours: Vec<&str> = tiers.iter().map(|t| t.colour.as_str()).collect();
        assert_eq!(
            colours,
            ["#7b112c", "#ffa500", "#ffdb00", "#ccff00", "#33ff00", "#009966", "#0000ff"]
        );
        let names: Vec<&str> = tiers.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            ["S-Tier", "A-Tier", "B-Tier", "C-Tier", "D-Tier", "E-Tier", "F-Tier"]
        );
    }

    #[test]
    fn channels_are_monotonic_within_each_segment() {
        let total = 13;
        let mut prev: Option<(f64, (u8, u8, u8))> = None;
        for i in 0..total {
            let t = i as f64 / (total - 1) as f64;
            let rgb = parse_hex_rgb(&gradient_colour(i, total)).unwrap();
            if let Some((prev_t, prev_rgb)) = prev {
                let same_segment = (prev_t * 3.0).floor() == (t * 3.0).floor() || t == 1.0;
                if same_segment {
                    if t <= 1.0 / 3.0 {
                        // orange -> yellow: green rises, red/blue fixed
                        assert!(rgb.1 >= prev_rgb.1);
                        assert_eq!(rgb.0, 255);
                        assert_eq!(rgb.2, 0);
                    } else if t <= 2.0 / 3.0 {
                        // yellow -> green: red falls
                        assert!(rgb.0 <= prev_rgb.0);
                        assert_eq!(rgb.2, 0);
                    } else {
                        // green -> blue: green falls, blue rises
                        assert!(rgb.1 <= prev_rgb.1);
                        assert!(rgb.2 >= prev_rgb.2);
                    }
                }
            }
            prev = Some((t, rgb));
        }
    }

    #[test]
    fn reapplying_after_removal_recolours_contiguously() {
        let mut tiers = default_tiers();
        // User overrides a colour, then removes the row after it.
        tiers[2].colour = "#123456".to_string();
        tiers.remove(3);
        apply_gradient(&mut tiers);

        assert_eq!(tiers[0].colour, TOP_TIER_COLOUR);
        let gradient_count = tiers.len() - 1;
        for (idx, tier) in tiers.iter().enumerate().skip(1) {
            assert_eq!(tier.colour, gradient_colour(idx - 1, gradient_count));
        }
        // The manual override did not survive the structural change.
        assert_ne!(tiers[2].colour, "#123456");
    }

    #[test]
    fn removing_a_stale_index_is_a_noop() {
        let mut tiers = default_tiers();
        remove_tier(&mut tiers, 42);
        assert_eq!(tiers, default_tiers());

        remove_tier(&mut tiers, 1);
        assert_eq!(tiers.len(), 6);
        assert_eq!(tiers[1].colour, gradient_colour(0, 5));
    }

    #[test]
    fn apply_gradient_handles_tiny_lists() {
        let mut empty: Vec<TierDraft> = vec![];
        apply_gradient(&mut empty);
        assert!(empty.is_empty());

        let mut top_only = vec![TierDraft { name: "S".into(), colour: "#000000".into() }];
        apply_gradient(&mut top_only);
        assert_eq!(top_only[0].colour, TOP_TIER_COLOUR);

        let mut two = vec![
            TierDraft { name: "S".into(), colour: "#000000".into() },
            TierDraft { name: "A".into(), colour: "#000000".into() },
        ];
        apply_gradient(&mut two);
        // Single non-top row: hard-coded orange, no division by zero.
        assert_eq!(two[1].colour, "#ffa500");
    }
}
