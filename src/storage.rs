//! Local Storage Mirror
//!
//! Two slots in browser local storage: the serialized menu document and the
//! session flag. Every failure here degrades soft: a bad document falls
//! back to the built-in default, a failed write leaves the in-memory state
//! authoritative and logs to the console.

use crate::models::Menu;

const MENU_KEY: &str = "menuData";
const AUTH_KEY: &str = "isAuthenticated";

fn local_storage() -> Option<web_sys::Storage> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg(target_arch = "wasm32")]
fn warn(message: String) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn warn(message: String) {
    eprintln!("{}", message);
}

/// Decode and validate a persisted menu document.
///
/// Returns `None` for malformed JSON and for documents without a single
/// category. Legacy documents without ids are upgraded in place.
pub fn decode_menu(raw: &str) -> Option<Menu> {
    let mut menu: Menu = serde_json::from_str(raw).ok()?;
    if menu.categories.is_empty() {
        return None;
    }
    menu.assign_missing_ids();
    Some(menu)
}

/// Load the persisted menu, falling back to the built-in default
pub fn load_menu() -> Menu {
    let Some(storage) = local_storage() else {
        return Menu::default_menu();
    };
    match storage.get_item(MENU_KEY) {
        Ok(Some(raw)) => decode_menu(&raw).unwrap_or_else(|| {
            warn(format!("[STORAGE] discarding invalid menu document ({} bytes)", raw.len()));
            Menu::default_menu()
        }),
        Ok(None) => Menu::default_menu(),
        Err(err) => {
            warn(format!("[STORAGE] failed to read menu: {:?}", err));
            Menu::default_menu()
        }
    }
}

/// Persist the full menu document. Write failures (quota, storage
/// unavailable) are logged and swallowed.
pub fn save_menu(menu: &Menu) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(menu) {
        Ok(json) => {
            if let Err(err) = storage.set_item(MENU_KEY, &json) {
                warn(format!("[STORAGE] failed to persist menu: {:?}", err));
            }
        }
        Err(err) => warn(format!("[STORAGE] failed to serialize menu: {}", err)),
    }
}

/// Whether a previous session was authenticated
pub fn load_auth_flag() -> bool {
    let Some(storage) = local_storage() else {
        return false;
    };
    matches!(storage.get_item(AUTH_KEY), Ok(Some(flag)) if flag == "true")
}

pub fn store_auth_flag() {
    if let Some(storage) = local_storage() {
        if let Err(err) = storage.set_item(AUTH_KEY, "true") {
            warn(format!("[STORAGE] failed to persist session: {:?}", err));
        }
    }
}

pub fn clear_auth_flag() {
    if let Some(storage) = local_storage() {
        if let Err(err) = storage.remove_item(AUTH_KEY) {
            warn(format!("[STORAGE] failed to clear session: {:?}", err));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rejects_malformed_json() {
        assert_eq!(decode_menu("not json"), None);
        assert_eq!(decode_menu("{\"categories\": 5}"), None);
        assert_eq!(decode_menu(""), None);
    }

    #[test]
    fn decode_rejects_documents_without_categories() {
        assert_eq!(decode_menu(r#"{"categories": []}"#), None);
    }

    #[test]
    fn decode_round_trips_a_saved_document() {
        let menu = Menu::default_menu();
        let json = serde_json::to_string(&menu).unwrap();
        assert_eq!(decode_menu(&json), Some(menu));
    }

    #[test]
    fn decode_upgrades_legacy_documents() {
        let raw = r#"{"categories": [{"name": "Drinks", "items": []}]}"#;
        let menu = decode_menu(raw).unwrap();
        assert_ne!(menu.categories[0].id, 0);
        assert!(menu.next_id > menu.categories[0].id);
    }

    #[test]
    fn load_without_storage_yields_the_default_menu() {
        // Native targets have no local storage, which is exactly the
        // "empty storage" cold-start path.
        let menu = load_menu();
        assert_eq!(menu, Menu::default_menu());
        assert!(!load_auth_flag());
    }
}
