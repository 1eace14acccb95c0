//! Menu Board App
//!
//! Root component: wires store, session, and view mode, and decides edit
//! vs. view rendering.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CategoryTabs, Header, LoginModal, MenuList, NoticeBar};
use crate::context::{use_edit_mode, AppContext};
use crate::session::Session;
use crate::store::AppState;
use crate::view_mode;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::restore());
    provide_context(store);

    let session = Session::restore();
    provide_context(session);

    let mode = view_mode::resolve();
    provide_context(AppContext::new(mode));

    let (login_open, set_login_open) = signal(false);

    // Ask for the password whenever the page is editable but anonymous
    Effect::new(move |_| {
        if !mode.read_only && !session.is_authenticated() {
            set_login_open.set(true);
        }
    });

    let edit_mode = use_edit_mode();

    view! {
        <div class="menu-app">
            <Show when=edit_mode>
                <Header />
            </Show>
            <CategoryTabs />
            <main class="menu-content">
                <MenuList />
            </main>
            <NoticeBar />
            <LoginModal open=login_open set_open=set_login_open />
        </div>
    }
}
