//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Dietary flags (independent booleans, camelCase on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryInfo {
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    pub is_nut_free: bool,
}

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Price in currency unit
    pub price: f64,
    pub category: String,
    /// Image URL
    pub image: String,
    pub available: bool,
    pub restaurant_id: i64,
    #[serde(rename = "dietaryInfo")]
    pub dietary_info: DietaryInfo,
}

/// Create menu item payload (every entity field except the generated id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    pub available: bool,
    pub restaurant_id: i64,
    #[serde(rename = "dietaryInfo")]
    pub dietary_info: DietaryInfo,
}

/// Update menu item payload (partial: absent fields are left untouched).
/// `dietary_info`, when present, replaces the whole flags record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<i64>,
    #[serde(rename = "dietaryInfo", skip_serializing_if = "Option::is_none")]
    pub dietary_info: Option<DietaryInfo>,
}

impl MenuItem {
    /// Build the stored entity from a create payload and a fresh id.
    pub fn from_create(id: i64, payload: MenuItemCreate) -> Self {
        Self {
            id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            category: payload.category,
            image: payload.image,
            available: payload.available,
            restaurant_id: payload.restaurant_id,
            dietary_info: payload.dietary_info,
        }
    }

    /// Shallow merge: overwrite only the fields present in the patch.
    pub fn merge(&mut self, patch: MenuItemUpdate) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(available) = patch.available {
            self.available = available;
        }
        if let Some(restaurant_id) = patch.restaurant_id {
            self.restaurant_id = restaurant_id;
        }
        if let Some(dietary_info) = patch.dietary_info {
            self.dietary_info = dietary_info;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_unspecified_fields() {
        let mut item = MenuItem::from_create(
            7,
            MenuItemCreate {
                name: "Caesar Salad".to_string(),
                description: "Fresh romaine lettuce".to_string(),
                price: 10.0,
                category: "Appetizers".to_string(),
                image: String::new(),
                available: true,
                restaurant_id: 1,
                dietary_info: DietaryInfo::default(),
            },
        );
        item.merge(MenuItemUpdate {
            price: Some(12.0),
            ..Default::default()
        });
        assert_eq!(item.price, 12.0);
        assert_eq!(item.name, "Caesar Salad");
        assert!(item.available);
    }

    #[test]
    fn test_dietary_info_round_trips_with_camel_case_keys() {
        let flags = DietaryInfo {
            is_vegetarian: true,
            is_nut_free: true,
            ..Default::default()
        };
        let json = serde_json::to_value(flags).unwrap();
        assert_eq!(json["isVegetarian"], true);
        assert_eq!(json["isVegan"], false);
        let back: DietaryInfo = serde_json::from_value(json).unwrap();
        assert_eq!(back, flags);
    }
}
