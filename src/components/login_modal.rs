//! Login Modal Component
//!
//! Owner password prompt. A wrong password reports inline and leaves the
//! session anonymous; there is no lockout.

use leptos::prelude::*;

use crate::session::Session;

#[component]
pub fn LoginModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let session = expect_context::<Session>();
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if session.login(&password.get()) {
            set_password.set(String::new());
            set_error.set(None);
            set_open.set(false);
        } else {
            set_error.set(Some("Invalid password".to_string()));
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay">
                <div class="modal-panel">
                    <div class="modal-header">
                        <h3 class="modal-title">"Admin Login"</h3>
                        <button class="close-btn" on:click=move |_| set_open.set(false)>"×"</button>
                    </div>
                    <form on:submit=on_submit>
                        <label class="field-label">"Password"</label>
                        <input
                            type="password"
                            class="field-input"
                            placeholder="Enter admin password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        {move || error.get().map(|err| view! { <p class="form-error">{err}</p> })}
                        <div class="modal-actions">
                            <button type="button" class="btn" on:click=move |_| set_open.set(false)>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn primary">"Login"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
