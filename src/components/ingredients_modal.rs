//! Ingredients Modal Component
//!
//! Detail view for a single dish, listing its ingredients in order.

use leptos::prelude::*;

use crate::models::MenuItem;

#[component]
pub fn IngredientsModal(
    item: MenuItem,
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
) -> impl IntoView {
    let name = item.name.clone();
    let ingredients = item.ingredients.clone();

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| set_open.set(false)>
                <div class="modal-panel" on:click=move |ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3 class="modal-title">{name.clone()}</h3>
                        <button class="close-btn" on:click=move |_| set_open.set(false)>"×"</button>
                    </div>
                    {if ingredients.is_empty() {
                        view! { <p class="modal-text">"No ingredients listed."</p> }.into_any()
                    } else {
                        view! {
                            <ul class="ingredient-list">
                                {ingredients
                                    .iter()
                                    .map(|ingredient| view! { <li>{ingredient.clone()}</li> })
                                    .collect_view()}
                            </ul>
                        }.into_any()
                    }}
                </div>
            </div>
        </Show>
    }
}
