//! Create Category Modal

use leptos::prelude::*;

use crate::store::{store_add_category, use_app_store};

#[component]
pub fn CreateCategoryModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let (name, set_name) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let close = move || {
        set_name.set(String::new());
        set_error.set(None);
        set_open.set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // The new category becomes active on success
        match store_add_category(&store, &name.get()) {
            Ok(()) => close(),
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| close()>
                <div class="modal-panel" on:click=move |ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3 class="modal-title">"New Category"</h3>
                        <button class="close-btn" on:click=move |_| close()>"×"</button>
                    </div>
                    <form on:submit=on_submit>
                        <label class="field-label">"Category name"</label>
                        <input
                            type="text"
                            class="field-input"
                            placeholder="e.g. Desserts"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                        {move || error.get().map(|err| view! { <p class="form-error">{err}</p> })}
                        <div class="modal-actions">
                            <button type="button" class="btn" on:click=move |_| close()>"Cancel"</button>
                            <button type="submit" class="btn primary">"Create"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
