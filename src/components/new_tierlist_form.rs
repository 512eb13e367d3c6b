//! Tierlist Creation Form
//!
//! Modal form collecting a name and an editable list of tier rows seeded
//! by the gradient generator. Adding or removing a row reapplies the
//! gradient to every non-top row; manual colour picks survive only until
//! the next structural change.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::PageChrome;
use crate::gradient;
use crate::models::TierDraft;

/// Submission guard: non-blank list name, at least one tier, and no blank
/// tier names. A failing guard makes submission a silent no-op.
pub fn creation_allowed(name: &str, tiers: &[TierDraft]) -> bool {
    !name.trim().is_empty()
        && !tiers.is_empty()
        && tiers.iter().all(|t| !t.name.trim().is_empty())
}

#[component]
pub fn NewTierlistForm(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_created: Callback<()>,
) -> impl IntoView {
    let chrome = use_context::<PageChrome>().expect("PageChrome should be provided");

    let (name, set_name) = signal(String::new());
    let (tiers, set_tiers) = signal(gradient::default_tiers());
    let (busy, set_busy) = signal(false);

    let rename_tier = move |idx: usize, value: String| {
        set_tiers.update(|rows| {
            if let Some(row) = rows.get_mut(idx) {
                row.name = value;
            }
        });
    };

    // Manual pick: no regeneration until the next add/remove.
    let recolour_tier = move |idx: usize, value: String| {
        set_tiers.update(|rows| {
            if let Some(row) = rows.get_mut(idx) {
                row.colour = value;
            }
        });
    };

    let add_tier = move |_| {
        set_tiers.update(|rows| {
            rows.push(TierDraft { name: String::new(), colour: "#cccccc".to_string() });
            gradient::apply_gradient(rows);
        });
    };

    let remove_tier = move |idx: usize| {
        set_tiers.update(|rows| gradient::remove_tier(rows, idx));
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let list_name = name.get();
        let rows = tiers.get();
        if !creation_allowed(&list_name, &rows) {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::tierlist::create(list_name.trim(), &rows).await {
                Ok(_) => on_created.run(()),
                Err(err) => chrome.report_error(format!("Failed to create tierlist: {err}")),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="modal-overlay">
            <div class="modal-card">
                <h2>"Create New Tierlist"</h2>
                <form on:submit=submit>
                    <input
                        type="text"
                        class="list-name-input"
                        placeholder="Tierlist name (e.g., Best Snails)"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <label class="tiers-label">"Tiers"</label>
                    <div class="tier-draft-rows">
                        {move || {
                            let count = tiers.get().len();
                            tiers.get().into_iter().enumerate().map(|(idx, row)| {
                                view! {
                                    <div class="tier-draft-row">
                                        <input
                                            type="text"
                                            class="tier-name-input"
                                            placeholder=format!("Tier {}", idx + 1)
                                            prop:value=row.name.clone()
                                            on:input=move |ev| rename_tier(idx, event_target_value(&ev))
                                        />
                                        <input
                                            type="color"
                                            class="tier-colour-input"
                                            prop:value=row.colour.clone()
                                            on:input=move |ev| recolour_tier(idx, event_target_value(&ev))
                                        />
                                        <Show when=move || { count > 1 }>
                                            <button
                                                type="button"
                                                class="remove-tier-btn"
                                                on:click=move |_| remove_tier(idx)
                                            >
                                                "×"
                                            </button>
                                        </Show>
                                    </div>
                                }
                            }).collect_view()
                        }}
                        <button type="button" class="add-tier-btn" on:click=add_tier>
                            "+ Add Tier"
                        </button>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="create-btn" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating..." } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::creation_allowed;
    use crate::gradient::default_tiers;
    use crate::models::TierDraft;

    #[test]
    fn default_seed_passes_the_guard() {
        assert!(creation_allowed("Best Snails", &default_tiers()));
    }

    #[test]
    fn blank_name_blocks_submission() {
        assert!(!creation_allowed("", &default_tiers()));
        assert!(!creation_allowed("   ", &default_tiers()));
    }

    #[test]
    fn zero_tiers_block_submission() {
        assert!(!creation_allowed("Best Snails", &[]));
    }

    #[test]
    fn any_blank_tier_name_blocks_submission() {
        let mut tiers = default_tiers();
        tiers[3].name = "  ".to_string();
        assert!(!creation_allowed("Best Snails", &tiers));

        let fine = vec![TierDraft { name: "Only".into(), colour: "#ffa500".into() }];
        assert!(creation_allowed("Best Snails", &fine));
    }
}
