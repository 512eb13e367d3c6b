//! Tier Editor Sidebar
//!
//! Editing surface for an existing tierlist's tiers. Colour changes
//! persist immediately per change event; name edits stay local until
//! blur (or Enter) to avoid a network call per keystroke.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::PageChrome;
use crate::models::Tier;

/// Owned partial edit handed up to the page, which turns it into a PATCH.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TierEdit {
    pub name: Option<String>,
    pub colour: Option<String>,
}

#[component]
pub fn TierEditor(
    tiers: ReadSignal<Vec<Tier>>,
    #[prop(into)] on_add: Callback<()>,
    #[prop(into)] on_update: Callback<(u32, TierEdit)>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let chrome = use_context::<PageChrome>().expect("PageChrome should be provided");

    // Local rows so typing does not fight the authoritative list; resynced
    // whenever the page's tiers change.
    let (local, set_local) = signal(Vec::<Tier>::new());
    Effect::new(move |_| {
        set_local.set(tiers.get());
    });

    let rename_local = move |id: u32, value: String| {
        set_local.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|t| t.id == id) {
                row.name = value;
            }
        });
    };

    let commit_name = move |id: u32| {
        let name = local.get_untracked().iter().find(|t| t.id == id).map(|t| t.name.clone());
        if let Some(name) = name {
            on_update.run((id, TierEdit { name: Some(name), colour: None }));
        }
    };

    let change_colour = move |id: u32, value: String| {
        set_local.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|t| t.id == id) {
                row.colour = value.clone();
            }
        });
        on_update.run((id, TierEdit { name: None, colour: Some(value) }));
    };

    view! {
        <div class="tier-editor">
            <div class="tier-editor-header">
                <h2>"Edit Tiers"</h2>
                <button class="close-btn" on:click=move |_| chrome.close_sidebar()>"×"</button>
            </div>
            <For
                each=move || local.get()
                key=|tier| tier.id
                children=move |tier| {
                    let tier_id = tier.id;
                    let name_value = move || {
                        local
                            .get()
                            .iter()
                            .find(|t| t.id == tier_id)
                            .map(|t| t.name.clone())
                            .unwrap_or_default()
                    };
                    let colour_value = move || {
                        local
                            .get()
                            .iter()
                            .find(|t| t.id == tier_id)
                            .map(|t| t.colour.clone())
                            .unwrap_or_default()
                    };
                    view! {
                        <div class="tier-editor-row">
                            <input
                                type="text"
                                class="tier-name-input"
                                prop:value=name_value
                                on:input=move |ev| rename_local(tier_id, event_target_value(&ev))
                                on:blur=move |_| commit_name(tier_id)
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        commit_name(tier_id);
                                    }
                                }
                            />
                            <input
                                type="color"
                                class="tier-colour-input"
                                prop:value=colour_value
                                on:input=move |ev| change_colour(tier_id, event_target_value(&ev))
                            />
                            <DeleteConfirmButton
                                button_class="tier-delete-btn"
                                confirm_label="Remove tier?"
                                on_confirm=move |_| on_delete.run(tier_id)
                            />
                        </div>
                    }
                }
            />
            <button class="add-tier-btn" on:click=move |_| on_add.run(())>
                "+ Add Tier"
            </button>
        </div>
    }
}
