//! Item Form Modal
//!
//! Shared create/edit form for menu items. Ingredients are entered as a
//! comma-separated list; the price field is validated before anything
//! reaches the store.

use leptos::prelude::*;

use crate::models::{parse_ingredients, parse_price, ItemDraft, MenuError, MenuItem};
use crate::store::{store_add_item, store_update_item, use_app_store, AppStateStoreFields};

/// What the item form is editing
#[derive(Clone, PartialEq)]
pub enum ItemFormTarget {
    Create,
    Edit(MenuItem),
}

#[component]
pub fn ItemFormModal(
    target: ItemFormTarget,
    set_target: WriteSignal<Option<ItemFormTarget>>,
) -> impl IntoView {
    let store = use_app_store();

    let editing_id = match &target {
        ItemFormTarget::Edit(item) => Some(item.id),
        ItemFormTarget::Create => None,
    };
    let title = if editing_id.is_some() { "Edit Menu Item" } else { "Add Menu Item" };

    let (name0, price0, description0, image0, ingredients0) = match &target {
        ItemFormTarget::Edit(item) => (
            item.name.clone(),
            format!("{:.2}", item.price),
            item.description.clone(),
            item.image_url.clone().unwrap_or_default(),
            item.ingredients.join(", "),
        ),
        ItemFormTarget::Create => Default::default(),
    };

    let (name, set_name) = signal(name0);
    let (price, set_price) = signal(price0);
    let (description, set_description) = signal(description0);
    let (image_url, set_image_url) = signal(image0);
    let (ingredients, set_ingredients) = signal(ingredients0);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(parsed_price) = parse_price(&price.get()) else {
            set_error.set(Some(MenuError::InvalidPrice.to_string()));
            return;
        };
        let image = image_url.get().trim().to_string();
        let draft = ItemDraft {
            name: name.get(),
            price: parsed_price,
            description: description.get(),
            image_url: (!image.is_empty()).then_some(image),
            ingredients: parse_ingredients(&ingredients.get()),
        };

        let category_id = store.active_category().get_untracked();
        let result = match editing_id {
            Some(item_id) => store_update_item(&store, category_id, item_id, draft),
            None => store_add_item(&store, category_id, draft),
        };
        match result {
            Ok(()) => set_target.set(None),
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| set_target.set(None)>
            <div class="modal-panel" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3 class="modal-title">{title}</h3>
                    <button class="close-btn" on:click=move |_| set_target.set(None)>"×"</button>
                </div>
                <form on:submit=on_submit>
                    <label class="field-label">"Name"</label>
                    <input
                        type="text"
                        class="field-input"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />

                    <label class="field-label">"Price (€)"</label>
                    <input
                        type="number"
                        class="field-input"
                        step="0.01"
                        min="0"
                        prop:value=move || price.get()
                        on:input=move |ev| set_price.set(event_target_value(&ev))
                    />

                    <label class="field-label">"Description"</label>
                    <textarea
                        class="field-input"
                        rows="2"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>

                    <label class="field-label">"Image URL"</label>
                    <input
                        type="text"
                        class="field-input"
                        placeholder="https://..."
                        prop:value=move || image_url.get()
                        on:input=move |ev| set_image_url.set(event_target_value(&ev))
                    />

                    <label class="field-label">"Ingredients (comma-separated)"</label>
                    <input
                        type="text"
                        class="field-input"
                        placeholder="Garlic, Butter, Parsley"
                        prop:value=move || ingredients.get()
                        on:input=move |ev| set_ingredients.set(event_target_value(&ev))
                    />

                    {move || error.get().map(|err| view! { <p class="form-error">{err}</p> })}

                    <div class="modal-actions">
                        <button type="button" class="btn" on:click=move |_| set_target.set(None)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn primary">
                            {if editing_id.is_some() { "Save Changes" } else { "Add Item" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
