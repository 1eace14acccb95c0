//! Menu Document Model
//!
//! The menu is a single JSON document: an ordered list of categories, each
//! holding an ordered list of items. All mutations go through the methods
//! here; the UI never touches the collections directly.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A single dish on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier, assigned by the document on insert.
    /// Documents written before ids existed deserialize as 0 and are
    /// re-assigned on load.
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub description: String,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// A named, ordered group of menu items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// The full menu document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub categories: Vec<MenuCategory>,
    /// Id allocation counter. Persisted so ids are never reused within one
    /// document, even across delete/create cycles.
    #[serde(rename = "nextId", default)]
    pub next_id: u32,
}

/// Unsaved item fields collected from the item form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub image_url: Option<String>,
    pub ingredients: Vec<String>,
}

/// Rejected menu operations, surfaced to the user as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    EmptyName,
    DuplicateCategory(String),
    LastCategory,
    UnknownCategory,
    UnknownItem,
    InvalidPrice,
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::EmptyName => write!(f, "Name cannot be empty"),
            MenuError::DuplicateCategory(name) => {
                write!(f, "A category named \"{}\" already exists", name)
            }
            MenuError::LastCategory => write!(f, "Cannot remove the last category"),
            MenuError::UnknownCategory => write!(f, "Category no longer exists"),
            MenuError::UnknownItem => write!(f, "Menu item no longer exists"),
            MenuError::InvalidPrice => write!(f, "Price must be a non-negative number"),
        }
    }
}

impl ItemDraft {
    fn validate(&self) -> Result<(), MenuError> {
        if self.name.trim().is_empty() {
            return Err(MenuError::EmptyName);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(MenuError::InvalidPrice);
        }
        Ok(())
    }

    fn into_item(self, id: u32) -> MenuItem {
        MenuItem {
            id,
            name: self.name.trim().to_string(),
            price: self.price,
            description: self.description,
            image_url: self.image_url.filter(|url| !url.trim().is_empty()),
            ingredients: self.ingredients,
        }
    }
}

impl Menu {
    /// Built-in menu used when nothing valid is persisted
    pub fn default_menu() -> Self {
        let mut menu = Menu {
            categories: vec![
                MenuCategory {
                    id: 0,
                    name: "Appetizers".to_string(),
                    items: vec![MenuItem {
                        id: 0,
                        name: "Garlic Bread".to_string(),
                        price: 5.99,
                        description: "Toasted bread with garlic butter".to_string(),
                        image_url: Some(
                            "https://images.unsplash.com/photo-1619535860434-ba1d8fc7b1ff?w=300"
                                .to_string(),
                        ),
                        ingredients: vec![
                            "French Bread".to_string(),
                            "Garlic".to_string(),
                            "Butter".to_string(),
                            "Parsley".to_string(),
                            "Sea Salt".to_string(),
                        ],
                    }],
                },
                MenuCategory {
                    id: 0,
                    name: "Main Course".to_string(),
                    items: vec![MenuItem {
                        id: 0,
                        name: "Grilled Salmon".to_string(),
                        price: 24.99,
                        description: "Fresh salmon with herbs".to_string(),
                        image_url: Some(
                            "https://images.unsplash.com/photo-1485921325833-c519f76c4927?w=300"
                                .to_string(),
                        ),
                        ingredients: vec![
                            "Atlantic Salmon".to_string(),
                            "Lemon".to_string(),
                            "Fresh Dill".to_string(),
                            "Garlic".to_string(),
                            "Olive Oil".to_string(),
                        ],
                    }],
                },
            ],
            next_id: 0,
        };
        menu.assign_missing_ids();
        menu
    }

    fn alloc_id(&mut self) -> u32 {
        if self.next_id == 0 {
            self.next_id = 1;
        }
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Give fresh ids to categories/items that have none (legacy documents)
    /// or that collide, and advance `next_id` past everything in use.
    ///
    /// Ids share one document-wide space.
    pub fn assign_missing_ids(&mut self) {
        let mut max_id = 0;
        for category in &self.categories {
            max_id = max_id.max(category.id);
            for item in &category.items {
                max_id = max_id.max(item.id);
            }
        }
        let mut next = self.next_id.max(max_id + 1);
        let mut used = HashSet::new();
        for category in &mut self.categories {
            if category.id == 0 || !used.insert(category.id) {
                category.id = next;
                used.insert(next);
                next += 1;
            }
            for item in &mut category.items {
                if item.id == 0 || !used.insert(item.id) {
                    item.id = next;
                    used.insert(next);
                    next += 1;
                }
            }
        }
        self.next_id = next;
    }

    pub fn category(&self, id: u32) -> Option<&MenuCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    fn category_mut(&mut self, id: u32) -> Option<&mut MenuCategory> {
        self.categories.iter_mut().find(|c| c.id == id)
    }

    pub fn first_category_id(&self) -> Option<u32> {
        self.categories.first().map(|c| c.id)
    }

    /// Append a new empty category. Names match case-sensitively, so adding
    /// an existing name is rejected rather than duplicated.
    pub fn add_category(&mut self, name: &str) -> Result<u32, MenuError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MenuError::EmptyName);
        }
        if self.categories.iter().any(|c| c.name == name) {
            return Err(MenuError::DuplicateCategory(name.to_string()));
        }
        let id = self.alloc_id();
        self.categories.push(MenuCategory {
            id,
            name: name.to_string(),
            items: Vec::new(),
        });
        Ok(id)
    }

    /// Remove a category. The last remaining category cannot be removed.
    pub fn remove_category(&mut self, id: u32) -> Result<(), MenuError> {
        if self.categories.len() <= 1 {
            return Err(MenuError::LastCategory);
        }
        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        if self.categories.len() == before {
            return Err(MenuError::UnknownCategory);
        }
        Ok(())
    }

    pub fn add_item(&mut self, category_id: u32, draft: ItemDraft) -> Result<u32, MenuError> {
        draft.validate()?;
        if self.category(category_id).is_none() {
            return Err(MenuError::UnknownCategory);
        }
        let id = self.alloc_id();
        let category = self.category_mut(category_id).ok_or(MenuError::UnknownCategory)?;
        category.items.push(draft.into_item(id));
        Ok(id)
    }

    /// Replace an item's fields in place, keeping its id and position.
    pub fn update_item(
        &mut self,
        category_id: u32,
        item_id: u32,
        draft: ItemDraft,
    ) -> Result<(), MenuError> {
        draft.validate()?;
        let category = self.category_mut(category_id).ok_or(MenuError::UnknownCategory)?;
        let item = category
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or(MenuError::UnknownItem)?;
        *item = draft.into_item(item_id);
        Ok(())
    }

    pub fn remove_item(&mut self, category_id: u32, item_id: u32) -> Result<(), MenuError> {
        let category = self.category_mut(category_id).ok_or(MenuError::UnknownCategory)?;
        let before = category.items.len();
        category.items.retain(|i| i.id != item_id);
        if category.items.len() == before {
            return Err(MenuError::UnknownItem);
        }
        Ok(())
    }
}

/// Split a comma-separated ingredients field into a clean list
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a price field. Rejects negatives and non-numbers.
pub fn parse_price(raw: &str) -> Option<f64> {
    let price: f64 = raw.trim().parse().ok()?;
    (price.is_finite() && price >= 0.0).then_some(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: f64) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            price,
            description: format!("{} description", name),
            image_url: None,
            ingredients: vec!["Salt".to_string()],
        }
    }

    fn unique_ids(menu: &Menu) -> bool {
        let mut seen = HashSet::new();
        menu.categories
            .iter()
            .all(|c| seen.insert(c.id) && c.items.iter().all(|i| seen.insert(i.id)))
    }

    #[test]
    fn default_menu_has_two_categories_with_one_item_each() {
        let menu = Menu::default_menu();
        let names: Vec<&str> = menu.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Appetizers", "Main Course"]);
        assert!(menu.categories.iter().all(|c| c.items.len() == 1));
        assert!(unique_ids(&menu));
    }

    #[test]
    fn add_category_is_idempotent_on_name() {
        let mut menu = Menu::default_menu();
        assert!(menu.add_category("Desserts").is_ok());
        assert_eq!(
            menu.add_category("Desserts"),
            Err(MenuError::DuplicateCategory("Desserts".to_string()))
        );
        let count = menu.categories.iter().filter(|c| c.name == "Desserts").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn category_names_match_case_sensitively() {
        let mut menu = Menu::default_menu();
        menu.add_category("Desserts").unwrap();
        assert!(menu.add_category("desserts").is_ok());
    }

    #[test]
    fn add_category_rejects_blank_names() {
        let mut menu = Menu::default_menu();
        assert_eq!(menu.add_category("   "), Err(MenuError::EmptyName));
    }

    #[test]
    fn remove_category_keeps_at_least_one() {
        let mut menu = Menu::default_menu();
        let first = menu.first_category_id().unwrap();
        menu.remove_category(first).unwrap();
        assert_eq!(menu.categories.len(), 1);
        let last = menu.first_category_id().unwrap();
        assert_eq!(menu.remove_category(last), Err(MenuError::LastCategory));
        assert_eq!(menu.categories.len(), 1);
    }

    #[test]
    fn add_then_remove_item_restores_the_sequence() {
        let mut menu = Menu::default_menu();
        let category_id = menu.first_category_id().unwrap();
        let original = menu.category(category_id).unwrap().items.clone();

        let item_id = menu.add_item(category_id, draft("Bruschetta", 6.5)).unwrap();
        assert_eq!(menu.category(category_id).unwrap().items.len(), original.len() + 1);

        menu.remove_item(category_id, item_id).unwrap();
        assert_eq!(menu.category(category_id).unwrap().items, original);
    }

    #[test]
    fn add_item_validates_the_draft() {
        let mut menu = Menu::default_menu();
        let category_id = menu.first_category_id().unwrap();
        assert_eq!(menu.add_item(category_id, draft("", 5.0)), Err(MenuError::EmptyName));
        assert_eq!(
            menu.add_item(category_id, draft("Soup", -1.0)),
            Err(MenuError::InvalidPrice)
        );
        assert_eq!(
            menu.add_item(category_id, draft("Soup", f64::NAN)),
            Err(MenuError::InvalidPrice)
        );
        assert_eq!(menu.add_item(9999, draft("Soup", 5.0)), Err(MenuError::UnknownCategory));
    }

    #[test]
    fn update_item_keeps_id_and_position() {
        let mut menu = Menu::default_menu();
        let category_id = menu.first_category_id().unwrap();
        menu.add_item(category_id, draft("Bruschetta", 6.5)).unwrap();
        let first_id = menu.category(category_id).unwrap().items[0].id;

        menu.update_item(category_id, first_id, draft("Garlic Knots", 4.99)).unwrap();

        let items = &menu.category(category_id).unwrap().items;
        assert_eq!(items[0].id, first_id);
        assert_eq!(items[0].name, "Garlic Knots");
        assert_eq!(items[0].price, 4.99);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn update_unknown_item_is_rejected() {
        let mut menu = Menu::default_menu();
        let category_id = menu.first_category_id().unwrap();
        assert_eq!(
            menu.update_item(category_id, 9999, draft("Soup", 5.0)),
            Err(MenuError::UnknownItem)
        );
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut menu = Menu::default_menu();
        let category_id = menu.first_category_id().unwrap();
        let a = menu.add_item(category_id, draft("A", 1.0)).unwrap();
        menu.remove_item(category_id, a).unwrap();
        let b = menu.add_item(category_id, draft("B", 2.0)).unwrap();
        assert!(b > a);
        assert!(unique_ids(&menu));
    }

    #[test]
    fn legacy_documents_without_ids_get_fresh_ones() {
        // The shape written before ids existed
        let raw = r#"{
            "categories": [
                {"name": "Appetizers", "items": [
                    {"name": "Garlic Bread", "price": 5.99, "description": "Toasted"}
                ]},
                {"name": "Drinks", "items": []}
            ]
        }"#;
        let mut menu: Menu = serde_json::from_str(raw).unwrap();
        assert_eq!(menu.categories[0].id, 0);
        menu.assign_missing_ids();
        assert!(unique_ids(&menu));
        assert!(menu.categories.iter().all(|c| c.id != 0));
        assert!(menu.next_id > menu.categories.last().unwrap().id);
    }

    #[test]
    fn serde_round_trip_preserves_the_document() {
        let mut menu = Menu::default_menu();
        let category_id = menu.first_category_id().unwrap();
        menu.add_item(
            category_id,
            ItemDraft {
                name: "Olives".to_string(),
                price: 3.0,
                description: String::new(),
                image_url: None,
                ingredients: Vec::new(),
            },
        )
        .unwrap();

        let json = serde_json::to_string(&menu).unwrap();
        let restored: Menu = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, menu);
    }

    #[test]
    fn item_json_uses_the_original_field_names() {
        let menu = Menu::default_menu();
        let json = serde_json::to_string(&menu).unwrap();
        assert!(json.contains("\"imageUrl\""));
        assert!(json.contains("\"ingredients\""));
        assert!(!json.contains("\"image_url\""));
    }

    #[test]
    fn parse_ingredients_trims_and_drops_empties() {
        assert_eq!(
            parse_ingredients(" Garlic , Butter ,, Parsley "),
            vec!["Garlic", "Butter", "Parsley"]
        );
        assert!(parse_ingredients("  ").is_empty());
    }

    #[test]
    fn parse_price_rejects_garbage() {
        assert_eq!(parse_price("5.99"), Some(5.99));
        assert_eq!(parse_price(" 0 "), Some(0.0));
        assert_eq!(parse_price("-1"), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("NaN"), None);
    }
}
