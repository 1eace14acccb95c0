//! Share Link Modal
//!
//! Shows the customer link for this deployment. Opening it renders the
//! menu read-only.

use leptos::prelude::*;

use crate::view_mode::view_only_url;

#[component]
pub fn ShareLinkModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let share_url = move || {
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default();
        view_only_url(&origin)
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| set_open.set(false)>
                <div class="modal-panel" on:click=move |ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3 class="modal-title">"Share Your Menu"</h3>
                        <button class="close-btn" on:click=move |_| set_open.set(false)>"×"</button>
                    </div>
                    <p class="modal-text">
                        "Customers opening this link see the menu without any editing controls."
                    </p>
                    <code class="share-url">{share_url()}</code>
                    <div class="modal-actions">
                        <a class="btn primary" href=share_url() target="_blank">
                            "Open View-Only Menu"
                        </a>
                    </div>
                </div>
            </div>
        </Show>
    }
}
