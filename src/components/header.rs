//! Header Component
//!
//! Edit-mode toolbar: restaurant logo, share link, logout.

use leptos::prelude::*;

use crate::components::{LogoModal, ShareLinkModal};
use crate::session::Session;

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<Session>();
    let (share_open, set_share_open) = signal(false);
    let (logo_open, set_logo_open) = signal(false);
    // In memory only; resets on reload
    let (logo, set_logo) = signal::<Option<String>>(None);

    view! {
        <header class="app-header">
            <div class="header-left">
                {move || match logo.get() {
                    Some(url) => view! {
                        <div class="logo-slot">
                            <img class="logo-image" src=url alt="Restaurant logo" />
                            <button class="logo-remove-btn" on:click=move |_| set_logo.set(None)>
                                "×"
                            </button>
                        </div>
                    }.into_any(),
                    None => view! {
                        <button class="btn" on:click=move |_| set_logo_open.set(true)>
                            "Upload Logo"
                        </button>
                    }.into_any(),
                }}
            </div>
            <div class="header-right">
                <button class="btn primary" on:click=move |_| set_share_open.set(true)>
                    "Share Menu"
                </button>
                <button class="btn" on:click=move |_| session.logout()>"Logout"</button>
            </div>
        </header>
        <ShareLinkModal open=share_open set_open=set_share_open />
        <LogoModal
            open=logo_open
            set_open=set_logo_open
            on_save=move |url: String| {
                set_logo.set(Some(url));
                set_logo_open.set(false);
            }
        />
    }
}
