//! Top Bar Component
//!
//! Logo, settings toggle, page-provided title and actions, theme toggle,
//! and the failure status banner.

use leptos::prelude::*;

use crate::context::PageChrome;
use crate::store::{store_set_neon, use_app_store, AppStateStoreFields};

#[component]
pub fn TopBar() -> impl IntoView {
    let chrome = use_context::<PageChrome>().expect("PageChrome should be provided");
    let store = use_app_store();

    let neon = move || store.neon().get();

    view! {
        <header class="app-header">
            <a href="/" class="app-logo">
                <span class="gradient-logo-text">"Tierboard"</span>
            </a>
            <button
                class="sidebar-cog-btn"
                aria-label="Toggle Settings"
                on:click=move |_| chrome.toggle_sidebar()
            >
                "⚙"
            </button>

            <div class="app-topbar-center">
                <span class="topbar-title">{move || chrome.title.get()}</span>
            </div>

            <div class="topbar-right">
                {move || chrome.actions.get().into_iter().map(|action| {
                    let on_click = action.on_click;
                    view! {
                        <button class="topbar-action-btn" on:click=move |_| on_click.run(())>
                            {action.label}
                        </button>
                    }
                }).collect_view()}

                <button
                    class=move || if neon() { "neon-mode-btn active" } else { "neon-mode-btn" }
                    aria-label="Neon Mode"
                    on:click=move |_| store_set_neon(&store, true)
                >
                    "🌈"
                </button>
                <button
                    class=move || if neon() { "dark-mode-btn" } else { "dark-mode-btn active" }
                    aria-label="Dark Mode"
                    on:click=move |_| store_set_neon(&store, false)
                >
                    "🌙"
                </button>
            </div>
        </header>

        <Show when=move || chrome.status.get().is_some()>
            <div class="status-banner" on:click=move |_| chrome.dismiss_status()>
                {move || chrome.status.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
