//! Add Item Modal
//!
//! Optional name plus a required image, previewed via an object URL and
//! uploaded as multipart form data.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::FormData;

use crate::api;
use crate::context::PageChrome;

#[component]
pub fn AddItemModal(
    tierlist_id: u32,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_added: Callback<()>,
) -> impl IntoView {
    let chrome = use_context::<PageChrome>().expect("PageChrome should be provided");

    let (name, set_name) = signal(String::new());
    let (file, set_file) = signal(None::<web_sys::File>);
    let (preview, set_preview) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let on_file_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let picked = input.files().and_then(|list| list.get(0));
        if let Some(old) = preview.get_untracked() {
            let _ = web_sys::Url::revoke_object_url(&old);
        }
        let url = picked
            .as_ref()
            .and_then(|f| web_sys::Url::create_object_url_with_blob(f).ok());
        set_preview.set(url);
        set_file.set(picked);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(image) = file.get() else { return };
        let Ok(form) = FormData::new() else {
            chrome.report_error("Failed to add item: form unavailable".to_string());
            return;
        };
        let _ = form.append_with_str("name", &name.get());
        let _ = form.append_with_blob("image", &image);
        set_busy.set(true);
        spawn_local(async move {
            match api::item::add(tierlist_id, form).await {
                Ok(_) => on_added.run(()),
                Err(err) => chrome.report_error(format!("Failed to add item: {err}")),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="modal-overlay">
            <div class="modal-card">
                <h2>"Add New Item"</h2>
                <form on:submit=submit>
                    <input
                        type="text"
                        placeholder="Name (optional)"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input type="file" accept="image/*" on:change=on_file_change/>
                    {move || preview.get().map(|url| view! {
                        <img class="item-preview" src=url alt="preview"/>
                    })}
                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="add-btn"
                            disabled=move || busy.get() || file.get().is_none()
                        >
                            {move || if busy.get() { "Adding..." } else { "Add" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
