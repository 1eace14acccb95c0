//! Category Tabs Component
//!
//! One tab per category. Edit mode adds a per-tab delete control (behind a
//! confirmation) and an add button opening the create-category modal.

use leptos::prelude::*;

use crate::components::{ConfirmDialog, CreateCategoryModal};
use crate::context::{use_edit_mode, AppContext};
use crate::store::{store_remove_category, use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryTabs() -> impl IntoView {
    let store = use_app_store();
    let ctx = expect_context::<AppContext>();
    let edit_mode = use_edit_mode();

    let (create_open, set_create_open) = signal(false);
    let (pending_delete, set_pending_delete) = signal::<Option<(u32, String)>>(None);

    let tabs = move || {
        store
            .menu()
            .read()
            .categories
            .iter()
            .map(|category| (category.id, category.name.clone()))
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="category-tabs">
            <For
                each=tabs
                key=|(id, name)| (*id, name.clone())
                children=move |(id, name)| {
                    let is_active = move || store.active_category().get() == id;
                    let tab_class = move || {
                        if is_active() { "category-tab active" } else { "category-tab" }
                    };

                    view! {
                        <div class="category-tab-slot">
                            <button class=tab_class on:click=move |_| store.active_category().set(id)>
                                {name}
                            </button>
                            <Show when=edit_mode>
                                <button
                                    class="tab-delete-btn"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        let name = store
                                            .menu()
                                            .read_untracked()
                                            .category(id)
                                            .map(|c| c.name.clone())
                                            .unwrap_or_default();
                                        set_pending_delete.set(Some((id, name)));
                                    }
                                >
                                    "×"
                                </button>
                            </Show>
                        </div>
                    }
                }
            />
            <Show when=edit_mode>
                <button class="category-add-btn" on:click=move |_| set_create_open.set(true)>
                    "+ Add Category"
                </button>
            </Show>
        </nav>
        <CreateCategoryModal open=create_open set_open=set_create_open />
        {move || pending_delete.get().map(|(id, name)| view! {
            <ConfirmDialog
                title="Delete Category"
                message=format!("Are you sure you want to delete \"{}\"? This action cannot be undone.", name)
                on_confirm=move |_: ()| {
                    if let Err(err) = store_remove_category(&store, id) {
                        ctx.notify(err.to_string());
                    }
                    set_pending_delete.set(None);
                }
                on_cancel=move |_: ()| set_pending_delete.set(None)
            />
        })}
    }
}
