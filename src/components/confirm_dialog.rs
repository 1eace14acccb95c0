//! Confirm Dialog Component
//!
//! Shared confirmation modal for destructive actions.
//!
//! # Arguments
//! * `title` - Dialog heading (e.g. "Delete Category")
//! * `message` - Full confirmation question
//! * `on_confirm` - Callback to execute when the user confirms
//! * `on_cancel` - Callback to execute when the user backs out

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal-panel" on:click=move |ev| ev.stop_propagation()>
                <h3 class="modal-title">{title}</h3>
                <p class="modal-text">{message}</p>
                <div class="modal-actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button class="btn danger" on:click=move |_| on_confirm.run(())>"Delete"</button>
                </div>
            </div>
        </div>
    }
}
