//! Sidebar Host Component
//!
//! Generic overlay panel. Shows the settings panel unless the active page
//! has provided its own content (the tier editor on board pages).

use leptos::prelude::*;

use crate::context::PageChrome;

#[component]
pub fn Sidebar() -> impl IntoView {
    let chrome = use_context::<PageChrome>().expect("PageChrome should be provided");

    view! {
        <Show when=move || chrome.sidebar_open.get()>
            <div class="sidebar-modal" on:click=move |_| chrome.close_sidebar()>
                <aside
                    class="sidebar-content-panel"
                    on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    {move || match chrome.sidebar_view.get() {
                        Some(page_view) => page_view.run(()),
                        None => view! { <SettingsPanel/> }.into_any(),
                    }}
                </aside>
            </div>
        </Show>
    }
}

#[component]
fn SettingsPanel() -> impl IntoView {
    view! {
        <div class="settings-panel">
            <h2>"Settings"</h2>
            <p>"Theme lives in the top bar. More settings coming soon."</p>
        </div>
    }
}
