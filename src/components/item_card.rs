//! Item Card Component
//!
//! Draggable card with optional image, name, and the vote toggle. While
//! the voting flag is armed the card shows a tier picker; picking a tier
//! casts a vote without touching the card's own tier assignment.

use leptos::prelude::*;
use leptos_dragdrop::{make_card_mousedown, DndSignals};

use crate::config;
use crate::models::{BoardItem, Tier};

#[component]
pub fn ItemCard(
    entry: BoardItem,
    tiers: ReadSignal<Vec<Tier>>,
    #[prop(into)] on_vote: Callback<(u32, u32)>,
    #[prop(into)] on_toggle_voting: Callback<u32>,
    #[prop(into)] on_preview: Callback<String>,
) -> impl IntoView {
    let dnd = use_context::<DndSignals>().expect("DndSignals should be provided");
    let item_id = entry.item.id;
    let voting = entry.voting;
    let name = entry.item.name.clone();
    let full_image = entry.item.image_url.clone();
    let thumb = entry.item.thumb_path().map(str::to_string);

    view! {
        <div
            class="item-card"
            class=("dragging", move || dnd.dragging_read.get() == Some(item_id))
            on:mousedown=make_card_mousedown(dnd, item_id)
        >
            {thumb.map(|path| {
                let full = full_image.clone();
                view! {
                    <img
                        class="item-image"
                        src=config::image_url(&path)
                        alt=name.clone()
                        on:click=move |_| {
                            if let Some(full) = full.clone() {
                                on_preview.run(config::image_url(&full));
                            }
                        }
                    />
                }
            })}
            <Show when=move || !name.is_empty()>
                <span class="item-name">{entry.item.name.clone()}</span>
            </Show>
            <button
                class=if voting { "vote-btn active" } else { "vote-btn" }
                title="Vote on placement"
                on:click=move |_| on_toggle_voting.run(item_id)
            >
                "🗳"
            </button>
            <Show when=move || voting>
                <div class="vote-picker">
                    <For
                        each=move || tiers.get()
                        key=|tier| tier.id
                        children=move |tier| {
                            let tier_id = tier.id;
                            view! {
                                <button
                                    class="vote-tier-btn"
                                    style=format!("background-color: {};", tier.colour)
                                    title=tier.name.clone()
                                    on:click=move |_| on_vote.run((item_id, tier_id))
                                ></button>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
