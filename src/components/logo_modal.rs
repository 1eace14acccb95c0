//! Logo Modal
//!
//! Sets the header logo from an image URL. The logo lives in memory only
//! and resets on reload.

use leptos::prelude::*;

#[component]
pub fn LogoModal(
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    #[prop(into)] on_save: Callback<String>,
) -> impl IntoView {
    let (url, set_url) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = url.get().trim().to_string();
        if value.is_empty() {
            return;
        }
        set_url.set(String::new());
        on_save.run(value);
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| set_open.set(false)>
                <div class="modal-panel" on:click=move |ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3 class="modal-title">"Upload Logo"</h3>
                        <button class="close-btn" on:click=move |_| set_open.set(false)>"×"</button>
                    </div>
                    <form on:submit=on_submit>
                        <label class="field-label">"Logo image URL"</label>
                        <input
                            type="text"
                            class="field-input"
                            placeholder="https://..."
                            prop:value=move || url.get()
                            on:input=move |ev| set_url.set(event_target_value(&ev))
                        />
                        <div class="modal-actions">
                            <button type="button" class="btn" on:click=move |_| set_open.set(false)>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn primary">"Save"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
