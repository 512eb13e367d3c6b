//! Tierlist Board Page
//!
//! Renders tiers as drop rows and items as draggable cards. Drag results
//! and tier edits apply optimistically as mutation commands with rollback
//! on failure; votes are an independent write path that never moves the
//! card locally.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::board;
use crate::components::{AddItemModal, Lightbox, TierEditor, TierRow, UnassignedRow};
use crate::components::tier_editor::TierEdit;
use crate::context::{DropSlot, PageChrome, TopbarAction};
use crate::export;
use crate::models::{BoardItem, Tier};
use crate::mutation::{Command, MutationStatus};

#[component]
pub fn TierlistPage() -> impl IntoView {
    let chrome = use_context::<PageChrome>().expect("PageChrome should be provided");
    let drop_slot = use_context::<DropSlot>().expect("DropSlot should be provided");

    let params = use_params_map();
    let list_id = Memo::new(move |_| {
        params.read().get("id").and_then(|raw| raw.parse::<u32>().ok())
    });

    let (list_name, set_list_name) = signal(None::<String>);
    let (tiers, set_tiers) = signal(Vec::<Tier>::new());
    let (items, set_items) = signal(Vec::<BoardItem>::new());
    let (show_add_item, set_show_add_item) = signal(false);
    let (lightbox, set_lightbox) = signal(None::<String>);
    let (items_reload, set_items_reload) = signal(0u32);
    // Latest drag's persistence state; drives the saving indicator.
    let (move_status, set_move_status) = signal(None::<(u32, MutationStatus)>);

    // Load tierlist details when the route id changes.
    Effect::new(move |_| {
        let Some(id) = list_id.get() else { return };
        spawn_local(async move {
            match api::tierlist::detail(id).await {
                Ok(detail) => {
                    set_list_name.set(Some(detail.name));
                    set_tiers.set(board::sorted_tiers(detail.tiers));
                }
                Err(err) => log::warn!("loading tierlist {id} failed: {err}"),
            }
        });
    });

    // Load items on mount and after an upload.
    Effect::new(move |_| {
        let Some(id) = list_id.get() else { return };
        let _ = items_reload.get();
        spawn_local(async move {
            match api::item::list(id).await {
                Ok(fetched) => set_items.set(board::wrap_items(fetched)),
                Err(err) => log::warn!("loading items for {id} failed: {err}"),
            }
        });
    });

    // Top bar: tierlist name plus the page actions.
    Effect::new(move |_| {
        let title = list_name
            .get()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("Tierlist {}", list_id.get().unwrap_or_default()));
        chrome.set_title(title);
    });
    chrome.set_actions(vec![
        TopbarAction {
            label: "Export as PNG".to_string(),
            on_click: Callback::new(move |_| {
                let Some(id) = list_id.get_untracked() else { return };
                let tiers = tiers.get_untracked();
                let items = items.get_untracked();
                spawn_local(async move {
                    if let Err(err) = export::export_board_png(id, tiers, items).await {
                        chrome.report_error(format!("Export failed: {err}"));
                    }
                });
            }),
        },
        TopbarAction {
            label: "+ Add Item".to_string(),
            on_click: Callback::new(move |_| set_show_add_item.set(true)),
        },
    ]);

    // Drag results: optimistic reassignment, one persistence call, and a
    // rollback to the captured bucket if that call fails. A drag that ends
    // outside every bucket never reaches this handler.
    drop_slot.install(Callback::new(move |(item_id, bucket): (u32, leptos_dragdrop::DropBucket)| {
        let dest = bucket.id();
        let mut snapshot = None;
        set_items.update(|list| snapshot = board::assign_tier(list, item_id, dest));
        let Some(previous) = snapshot else { return };
        let mut cmd = Command::new(previous);
        set_move_status.set(Some((item_id, cmd.status())));
        spawn_local(async move {
            match api::item::set_tier(item_id, dest).await {
                Ok(_) => cmd.confirm(),
                Err(err) => {
                    let previous = cmd.fail();
                    set_items.update(|list| {
                        board::assign_tier(list, item_id, previous);
                    });
                    chrome.report_error(format!("Failed to move item: {err}"));
                }
            }
            // A newer drag owns the indicator; leave its entry alone.
            set_move_status.update(|slot| {
                if let Some((id, status)) = slot {
                    if *id == item_id {
                        *status = cmd.status();
                    }
                }
            });
        });
    }));

    // Voting: fires the vote, then clears the armed flag no matter what
    // identity the response reports. Never touches the tier assignment.
    let on_toggle_voting = Callback::new(move |item_id: u32| {
        set_items.update(|list| {
            let armed = list
                .iter()
                .find(|b| b.item.id == item_id)
                .map(|b| b.voting)
                .unwrap_or(false);
            board::set_voting(list, item_id, !armed);
        });
    });
    let on_vote = Callback::new(move |(item_id, tier_id): (u32, u32)| {
        spawn_local(async move {
            if let Err(err) = api::item::vote(item_id, tier_id).await {
                chrome.report_error(format!("Vote failed: {err}"));
            }
            set_items.update(|list| board::set_voting(list, item_id, false));
        });
    });

    // Tier editing, delegated from the sidebar.
    let on_add_tier = Callback::new(move |_: ()| {
        let Some(id) = list_id.get_untracked() else { return };
        spawn_local(async move {
            match api::tier::create(id, "New Tier", "#cccccc").await {
                Ok(tier) => set_tiers.update(|list| list.push(tier)),
                Err(err) => chrome.report_error(format!("Failed to add tier: {err}")),
            }
        });
    });
    let on_update_tier = Callback::new(move |(tier_id, edit): (u32, TierEdit)| {
        spawn_local(async move {
            let patch = api::tier::TierPatch {
                name: edit.name.as_deref(),
                colour: edit.colour.as_deref(),
            };
            match api::tier::update(tier_id, &patch).await {
                Ok(updated) => set_tiers.update(|list| {
                    if let Some(row) = list.iter_mut().find(|t| t.id == tier_id) {
                        *row = updated;
                    }
                }),
                Err(err) => {
                    // Renotify so the sidebar resyncs its rows from the
                    // still-authoritative list.
                    set_tiers.update(|_| {});
                    chrome.report_error(format!("Failed to update tier: {err}"));
                }
            }
        });
    });
    let on_delete_tier = Callback::new(move |tier_id: u32| {
        spawn_local(async move {
            match api::tier::delete(tier_id).await {
                Ok(()) => set_tiers.update(|list| list.retain(|t| t.id != tier_id)),
                Err(err) => chrome.report_error(format!("Failed to delete tier: {err}")),
            }
        });
    });

    chrome.set_sidebar_view(Some(Callback::new(move |_| {
        view! {
            <TierEditor
                tiers=tiers
                on_add=on_add_tier
                on_update=on_update_tier
                on_delete=on_delete_tier
            />
        }
        .into_any()
    })));

    on_cleanup(move || {
        drop_slot.clear();
        chrome.leave_page();
    });

    let on_preview = Callback::new(move |url: String| set_lightbox.set(Some(url)));
    let on_added = move |_: ()| {
        set_show_add_item.set(false);
        set_items_reload.update(|v| *v += 1);
    };

    view! {
        <div class="tierlist-page">
            <div class="board">
                <For
                    each=move || tiers.get()
                    key=|tier| (tier.id, tier.name.clone(), tier.colour.clone())
                    children=move |tier| {
                        view! {
                            <TierRow
                                tier=tier
                                items=items
                                tiers=tiers
                                on_vote=on_vote
                                on_toggle_voting=on_toggle_voting
                                on_preview=on_preview
                            />
                        }
                    }
                />
                <UnassignedRow
                    items=items
                    tiers=tiers
                    on_vote=on_vote
                    on_toggle_voting=on_toggle_voting
                    on_preview=on_preview
                />
            </div>

            <Show when=move || matches!(move_status.get(), Some((_, MutationStatus::Pending)))>
                <div class="saving-indicator">"Saving…"</div>
            </Show>

            <Show when=move || show_add_item.get()>
                {move || list_id.get().map(|id| view! {
                    <AddItemModal
                        tierlist_id=id
                        on_close=move |_| set_show_add_item.set(false)
                        on_added=on_added
                    />
                })}
            </Show>

            <Lightbox image=lightbox set_image=set_lightbox/>
        </div>
    }
}
