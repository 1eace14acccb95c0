//! Menu List Component
//!
//! Item cards for the active category, with the add/edit entry points.

use leptos::prelude::*;

use crate::components::{ItemFormModal, ItemFormTarget, MenuItemCard};
use crate::context::use_edit_mode;
use crate::models::MenuItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MenuList() -> impl IntoView {
    let store = use_app_store();
    let edit_mode = use_edit_mode();

    let (form_target, set_form_target) = signal::<Option<ItemFormTarget>>(None);

    let items = move || -> Vec<MenuItem> {
        let active = store.active_category().get();
        store
            .menu()
            .read()
            .category(active)
            .map(|category| category.items.clone())
            .unwrap_or_default()
    };

    let add_button = move || {
        view! {
            <button
                class="add-item-btn"
                on:click=move |_| set_form_target.set(Some(ItemFormTarget::Create))
            >
                "+ Add Menu Item"
            </button>
        }
    };

    view! {
        <div class="menu-list">
            <Show when=edit_mode>{add_button()}</Show>
            {move || {
                items()
                    .into_iter()
                    .map(|item| view! { <MenuItemCard item=item set_form_target=set_form_target /> })
                    .collect_view()
            }}
            <Show when=move || edit_mode() && !items().is_empty()>{add_button()}</Show>
        </div>
        {move || form_target.get().map(|target| view! {
            <ItemFormModal target=target set_target=set_form_target />
        })}
    }
}
