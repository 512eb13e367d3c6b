//! Dashboard Page
//!
//! Authenticated landing page: redirects to the server-hosted login when
//! `/auth/me` yields nothing, otherwise lists tierlists as cards and
//! hosts the creation form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::NewTierlistForm;
use crate::config;
use crate::context::PageChrome;
use crate::models::TierlistSummary;
use crate::store::{store_set_user, use_app_store, AppStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let chrome = use_context::<PageChrome>().expect("PageChrome should be provided");
    let store = use_app_store();

    let (tierlists, set_tierlists) = signal(Vec::<TierlistSummary>::new());
    let (show_new_form, set_show_new_form) = signal(false);
    let (reload, set_reload) = signal(0u32);

    // Who am I? Any failure means "no user" and a redirect to login.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::auth::current_user().await {
                Some(user) => store_set_user(&store, Some(user)),
                None => {
                    if let Some(win) = web_sys::window() {
                        let _ = win.location().set_href(&config::login_url());
                    }
                }
            }
        });
    });

    // Greet the user in the top bar once known.
    Effect::new(move |_| {
        if let Some(user) = store.user().get() {
            chrome.set_title(format!("Welcome, {}!", user.username));
        }
    });
    on_cleanup(move || chrome.leave_page());

    Effect::new(move |_| {
        let _ = reload.get();
        spawn_local(async move {
            match api::tierlist::list().await {
                Ok(data) => set_tierlists.set(data),
                Err(err) => log::warn!("loading tierlists failed: {err}"),
            }
        });
    });

    let on_created = move |_: ()| {
        set_show_new_form.set(false);
        set_reload.update(|v| *v += 1);
    };

    view! {
        <Show
            when=move || store.user().get().is_some()
            fallback=|| view! { <div class="dashboard-loading">"Loading..."</div> }
        >
            <div class="dashboard">
                <button class="new-tierlist-btn" on:click=move |_| set_show_new_form.set(true)>
                    "+ New Tierlist"
                </button>

                <Show when=move || show_new_form.get()>
                    <NewTierlistForm
                        on_close=move |_| set_show_new_form.set(false)
                        on_created=on_created
                    />
                </Show>

                <Show
                    when=move || !tierlists.get().is_empty()
                    fallback=|| view! {
                        <div class="dashboard-empty">
                            "No tierlists yet. Make your first one!"
                        </div>
                    }
                >
                    <div class="dashboard-card-list">
                        <For
                            each=move || tierlists.get()
                            key=|tl| tl.id
                            children=move |tl| {
                                view! {
                                    <a class="dashboard-card" href=format!("/tierlists/{}", tl.id)>
                                        <div class="dashboard-card-title">{tl.name.clone()}</div>
                                        <div class="dashboard-card-id">{format!("ID: {}", tl.id)}</div>
                                    </a>
                                }
                            }
                        />
                    </div>
                </Show>
            </div>
        </Show>
    }
}
