//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store owns
//! the menu document; every successful mutation is immediately mirrored to
//! local storage in full, with no batching or partial writes.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ItemDraft, Menu, MenuError};
use crate::storage;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The authoritative menu document
    pub menu: Menu,
    /// Id of the category whose items are on screen
    pub active_category: u32,
}

impl AppState {
    /// Load the persisted menu (or the default) and activate its first
    /// category.
    pub fn restore() -> Self {
        let menu = storage::load_menu();
        web_sys::console::log_1(
            &format!("[STORE] loaded menu with {} categories", menu.categories.len()).into(),
        );
        let active_category = menu.first_category_id().unwrap_or_default();
        Self { menu, active_category }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Mutation Helpers
// ========================

fn persist(store: &AppStore) {
    storage::save_menu(&store.menu().read_untracked());
}

/// Create a category and make it active
pub fn store_add_category(store: &AppStore, name: &str) -> Result<(), MenuError> {
    let id = store.menu().write().add_category(name)?;
    store.active_category().set(id);
    persist(store);
    Ok(())
}

/// Remove a category; activation moves to the first remaining one
pub fn store_remove_category(store: &AppStore, category_id: u32) -> Result<(), MenuError> {
    store.menu().write().remove_category(category_id)?;
    if store.active_category().get_untracked() == category_id {
        let first = store.menu().read_untracked().first_category_id().unwrap_or_default();
        store.active_category().set(first);
    }
    persist(store);
    Ok(())
}

pub fn store_add_item(store: &AppStore, category_id: u32, draft: ItemDraft) -> Result<(), MenuError> {
    store.menu().write().add_item(category_id, draft)?;
    persist(store);
    Ok(())
}

pub fn store_update_item(
    store: &AppStore,
    category_id: u32,
    item_id: u32,
    draft: ItemDraft,
) -> Result<(), MenuError> {
    store.menu().write().update_item(category_id, item_id, draft)?;
    persist(store);
    Ok(())
}

pub fn store_remove_item(store: &AppStore, category_id: u32, item_id: u32) -> Result<(), MenuError> {
    store.menu().write().remove_item(category_id, item_id)?;
    persist(store);
    Ok(())
}
