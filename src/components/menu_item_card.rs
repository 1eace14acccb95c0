//! Menu Item Card Component
//!
//! One dish: image, name, price, description. Clicking the card opens the
//! ingredients modal; edit mode adds edit/delete controls.

use leptos::prelude::*;

use crate::components::{ConfirmDialog, IngredientsModal, ItemFormTarget};
use crate::context::{use_edit_mode, AppContext};
use crate::models::MenuItem;
use crate::store::{store_remove_item, use_app_store, AppStateStoreFields};

#[component]
pub fn MenuItemCard(
    item: MenuItem,
    set_form_target: WriteSignal<Option<ItemFormTarget>>,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = expect_context::<AppContext>();
    let edit_mode = use_edit_mode();

    let (ingredients_open, set_ingredients_open) = signal(false);
    let (confirm_open, set_confirm_open) = signal(false);

    let item_id = item.id;
    let price_label = format!("€{:.2}", item.price);
    let edit_item = StoredValue::new(item.clone());
    let modal_item = item.clone();
    let delete_message = format!(
        "Are you sure you want to delete \"{}\"? This action cannot be undone.",
        item.name
    );

    let delete = move |_: ()| {
        let category_id = store.active_category().get_untracked();
        if let Err(err) = store_remove_item(&store, category_id, item_id) {
            ctx.notify(err.to_string());
        }
        set_confirm_open.set(false);
    };

    view! {
        <article class="menu-card" on:click=move |_| set_ingredients_open.set(true)>
            <Show when=edit_mode>
                <div class="card-actions">
                    <button
                        class="card-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_form_target.set(Some(ItemFormTarget::Edit(edit_item.get_value())));
                        }
                    >
                        "Edit"
                    </button>
                    <button
                        class="card-btn danger"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirm_open.set(true);
                        }
                    >
                        "×"
                    </button>
                </div>
            </Show>
            {item.image_url.clone().map(|url| view! {
                <img class="card-image" src=url alt=item.name.clone() />
            })}
            <div class="card-body">
                <div class="card-heading">
                    <h3 class="card-name">{item.name.clone()}</h3>
                    <span class="card-price">{price_label}</span>
                </div>
                <p class="card-description">{item.description.clone()}</p>
                <span class="card-hint">"Click for ingredients"</span>
            </div>
        </article>
        <IngredientsModal item=modal_item open=ingredients_open set_open=set_ingredients_open />
        {move || confirm_open.get().then(|| view! {
            <ConfirmDialog
                title="Delete Menu Item"
                message=delete_message.clone()
                on_confirm=delete
                on_cancel=move |_: ()| set_confirm_open.set(false)
            />
        })}
    }
}
