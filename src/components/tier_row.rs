//! Tier Row Components
//!
//! One coloured drop row per tier, plus the sticky unassigned strip at
//! the bottom of the board. Rows are drop buckets for the drag layer.

use leptos::prelude::*;
use leptos_dragdrop::{make_bucket_mouseenter, make_bucket_mouseleave, DndSignals, DropBucket};

use crate::board;
use crate::color::hex_to_rgba;
use crate::components::ItemCard;
use crate::models::{BoardItem, Tier};

#[component]
pub fn TierRow(
    tier: Tier,
    items: ReadSignal<Vec<BoardItem>>,
    tiers: ReadSignal<Vec<Tier>>,
    #[prop(into)] on_vote: Callback<(u32, u32)>,
    #[prop(into)] on_toggle_voting: Callback<u32>,
    #[prop(into)] on_preview: Callback<String>,
) -> impl IntoView {
    let dnd = use_context::<DndSignals>().expect("DndSignals should be provided");
    let tier_id = tier.id;
    let bucket = DropBucket::Bucket(tier_id);
    let row_style = format!(
        "--tier-color: {}; --tier-bg: {};",
        tier.colour,
        hex_to_rgba(&tier.colour, 0.1)
    );

    view! {
        <div
            class="tier-box"
            class=("drop-hover", move || dnd.hover_read.get() == Some(bucket))
            style=row_style
            on:mouseenter=make_bucket_mouseenter(dnd, bucket)
            on:mouseleave=make_bucket_mouseleave(dnd)
        >
            <div class="tier-label">{tier.name.clone()}</div>
            <div class="tier-items">
                {move || board::items_in(&items.get(), Some(tier_id)).into_iter().map(|entry| {
                    view! {
                        <ItemCard
                            entry=entry
                            tiers=tiers
                            on_vote=on_vote
                            on_toggle_voting=on_toggle_voting
                            on_preview=on_preview
                        />
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn UnassignedRow(
    items: ReadSignal<Vec<BoardItem>>,
    tiers: ReadSignal<Vec<Tier>>,
    #[prop(into)] on_vote: Callback<(u32, u32)>,
    #[prop(into)] on_toggle_voting: Callback<u32>,
    #[prop(into)] on_preview: Callback<String>,
) -> impl IntoView {
    let dnd = use_context::<DndSignals>().expect("DndSignals should be provided");
    let bucket = DropBucket::Unassigned;

    view! {
        <div
            class="unassigned-row"
            class=("drop-hover", move || dnd.hover_read.get() == Some(bucket))
            on:mouseenter=make_bucket_mouseenter(dnd, bucket)
            on:mouseleave=make_bucket_mouseleave(dnd)
        >
            <h3 class="unassigned-label">"Unassigned"</h3>
            <div class="unassigned-items">
                {move || board::items_in(&items.get(), None).into_iter().map(|entry| {
                    view! {
                        <ItemCard
                            entry=entry
                            tiers=tiers
                            on_vote=on_vote
                            on_toggle_voting=on_toggle_voting
                            on_preview=on_preview
                        />
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
