//! Tierboard Frontend App
//!
//! Shell layout (top bar, sidebar host, status banner) around the two
//! routed pages. Binds the document-level drag listeners exactly once.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{DashboardPage, Sidebar, TierlistPage, TopBar};
use crate::context::{DropSlot, PageChrome};
use crate::store::{AppState, AppStateStoreFields};
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let chrome = PageChrome::new();
    provide_context(chrome);

    // Keep the body class in sync with the theme.
    Effect::new(move |_| theme::apply(store.neon().get()));

    // Drag layer: signals and document listeners live for the whole app;
    // the board page plugs its drop handler into the slot.
    let dnd = create_dnd_signals();
    provide_context(dnd);
    let drop_slot = DropSlot::new();
    provide_context(drop_slot);
    bind_global_mouseup(dnd, move |card_id, bucket| {
        if let Some(handler) = drop_slot.handler.get_untracked() {
            handler.run((card_id, bucket));
        }
    });

    view! {
        <Router>
            <div class="app-root">
                <TopBar/>
                <Sidebar/>
                <main class="app-main">
                    <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                        <Route path=path!("/") view=DashboardPage/>
                        <Route path=path!("/tierlists/:id") view=TierlistPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
