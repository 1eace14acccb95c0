//! Notice Bar Component
//!
//! Renders the transient app notice. Auto-dismisses via the context timer;
//! clicking dismisses early.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        {move || ctx.notice().map(|message| view! {
            <div class="notice-bar" on:click=move |_| ctx.clear_notice()>{message}</div>
        })}
    }
}
