//! Lightbox Component
//!
//! Full-size image overlay; clicking outside the image closes it.

use leptos::prelude::*;

#[component]
pub fn Lightbox(
    image: ReadSignal<Option<String>>,
    set_image: WriteSignal<Option<String>>,
) -> impl IntoView {
    view! {
        {move || image.get().map(|url| view! {
            <div class="lightbox-overlay" on:click=move |_| set_image.set(None)>
                <img
                    class="lightbox-image"
                    src=url.clone()
                    alt="Full preview"
                    on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                />
            </div>
        })}
    }
}
