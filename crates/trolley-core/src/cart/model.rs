//! Cart domain models.
//!
//! The persisted cart is a host-owned JSON document; these models give it a
//! typed shape without constraining the open-ended fields the host may
//! attach. Extraction from raw JSON is deliberately lenient: a document or
//! item that does not match the expected shape degrades to "empty" or
//! "dropped" rather than an error, so malformed host input is recovered
//! locally and never surfaced.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single cart entry, keyed by its `name`.
///
/// The typed shape covers the identity field and the quantity; every other
/// field an item carries on the wire is preserved verbatim in `extra` and
/// flattened back into the object on serialization.
///
/// `quantity` is `None` when the field was absent on the wire. The adjuster
/// reads an absent quantity as 0; the field-wise merge reads it as
/// "no override".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Identity of the item, unique within a cart. Never empty.
    pub name: String,
    /// Non-negative quantity. Items never rest at quantity 0; the adjuster
    /// removes them instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,
    /// Open-ended additional fields, owned by whoever put them there.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CartItem {
    /// Creates a new item with no extra fields.
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity: Some(quantity),
            extra: Map::new(),
        }
    }

    /// Extracts an item from a raw JSON value.
    ///
    /// Returns `None` when the value is not an object or has no non-empty
    /// string `name` (such elements are silently dropped upstream). A
    /// `quantity` that is not a non-negative integer is treated as absent.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let name = object.get("name")?.as_str()?;
        if name.is_empty() {
            return None;
        }
        let quantity = object.get("quantity").and_then(Value::as_u64);
        let extra = object
            .iter()
            .filter(|(key, _)| key.as_str() != "name" && key.as_str() != "quantity")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Some(Self {
            name: name.to_string(),
            quantity,
            extra,
        })
    }

    /// Field-wise merge with an incoming record for the same name.
    ///
    /// Incoming fields take precedence on collision; fields present on only
    /// one side are preserved.
    pub fn merged_with(&self, incoming: &Self) -> Self {
        let mut extra = self.extra.clone();
        for (key, value) in &incoming.extra {
            extra.insert(key.clone(), value.clone());
        }
        Self {
            name: incoming.name.clone(),
            quantity: incoming.quantity.or(self.quantity),
            extra,
        }
    }
}

/// The persisted cart document.
///
/// `items` is the reconciled list of entries; `extra` holds every other
/// top-level field of the host document, passed through untouched by merges
/// that do not concern it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Cart entries, in first-insertion order.
    #[serde(default)]
    pub items: Vec<CartItem>,
    /// Opaque top-level fields owned by the host.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracts a cart from a raw host document.
    ///
    /// An absent or non-object document yields the empty cart. A missing or
    /// non-list `items` field yields no items. Elements that are not
    /// item-shaped are dropped.
    pub fn from_value(value: Option<&Value>) -> Self {
        let Some(object) = value.and_then(Value::as_object) else {
            return Self::default();
        };
        let items = object
            .get("items")
            .and_then(Value::as_array)
            .map(|elements| elements.iter().filter_map(CartItem::from_value).collect())
            .unwrap_or_default();
        let extra = object
            .iter()
            .filter(|(key, _)| key.as_str() != "items")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self { items, extra }
    }

    /// Extracts delta items from an external payload.
    ///
    /// A payload without a list-shaped `items` field yields the empty
    /// sequence; elements without a usable `name` are dropped.
    pub fn delta_items(payload: &Value) -> Vec<CartItem> {
        payload
            .get("items")
            .and_then(Value::as_array)
            .map(|elements| elements.iter().filter_map(CartItem::from_value).collect())
            .unwrap_or_default()
    }

    /// Returns the item with the given name, if present.
    pub fn item(&self, name: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_from_value_requires_name() {
        assert!(CartItem::from_value(&json!({"quantity": 5})).is_none());
        assert!(CartItem::from_value(&json!({"name": ""})).is_none());
        assert!(CartItem::from_value(&json!("apple")).is_none());
    }

    #[test]
    fn test_item_from_value_keeps_extra_fields() {
        let item = CartItem::from_value(&json!({
            "name": "apple",
            "quantity": 2,
            "color": "red"
        }))
        .unwrap();
        assert_eq!(item.name, "apple");
        assert_eq!(item.quantity, Some(2));
        assert_eq!(item.extra.get("color"), Some(&json!("red")));
    }

    #[test]
    fn test_item_from_value_malformed_quantity_is_absent() {
        let item = CartItem::from_value(&json!({"name": "apple", "quantity": "two"})).unwrap();
        assert_eq!(item.quantity, None);
        assert!(item.extra.is_empty());
    }

    #[test]
    fn test_item_merge_incoming_precedence() {
        let mut base = CartItem::new("x", 1);
        base.extra.insert("color".into(), json!("red"));
        let incoming = CartItem::new("x", 3);
        let merged = base.merged_with(&incoming);
        assert_eq!(merged.quantity, Some(3));
        assert_eq!(merged.extra.get("color"), Some(&json!("red")));
    }

    #[test]
    fn test_item_merge_absent_incoming_quantity_keeps_base() {
        let base = CartItem::new("x", 4);
        let incoming = CartItem {
            name: "x".to_string(),
            quantity: None,
            extra: Map::new(),
        };
        assert_eq!(base.merged_with(&incoming).quantity, Some(4));
    }

    #[test]
    fn test_cart_from_absent_value_is_empty() {
        let cart = Cart::from_value(None);
        assert!(cart.items.is_empty());
        assert!(cart.extra.is_empty());
    }

    #[test]
    fn test_cart_from_value_preserves_top_level_fields() {
        let cart = Cart::from_value(Some(&json!({
            "items": [{"name": "milk", "quantity": 2}],
            "theme": "dark"
        })));
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.extra.get("theme"), Some(&json!("dark")));
    }

    #[test]
    fn test_cart_from_value_non_list_items() {
        let cart = Cart::from_value(Some(&json!({"items": "oops"})));
        assert!(cart.items.is_empty());
    }

    #[test]
    fn test_delta_items_drops_nameless_elements() {
        let items = Cart::delta_items(&json!({
            "items": [{"name": "milk", "quantity": 5}, {"quantity": 1}, 42]
        }));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "milk");
    }

    #[test]
    fn test_cart_serialization_round_trip() {
        let cart = Cart::from_value(Some(&json!({
            "items": [{"name": "milk", "quantity": 2, "unit": "l"}],
            "note": "weekly"
        })));
        let value = serde_json::to_value(&cart).unwrap();
        assert_eq!(value["items"][0]["unit"], json!("l"));
        assert_eq!(value["note"], json!("weekly"));
    }
}
