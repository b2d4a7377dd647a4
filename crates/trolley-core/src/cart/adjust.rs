//! User-driven quantity adjustment.

use crate::cart::model::Cart;

/// Applies a signed quantity delta to the named item.
///
/// No-ops returned as the unchanged cart: empty `name`, zero `delta`, or no
/// item with that name (this operation never creates items). Otherwise the
/// quantity floors at zero, with a missing quantity read as 0; an item that
/// reaches zero is removed entirely, so no zero-quantity item rests in the
/// cart. The relative order of all other items is preserved.
pub fn adjust(base: &Cart, name: &str, delta: i64) -> Cart {
    if name.is_empty() || delta == 0 {
        return base.clone();
    }
    let Some(position) = base.items.iter().position(|item| item.name == name) else {
        return base.clone();
    };

    let current = base.items[position].quantity.unwrap_or(0);
    let next_quantity = (i128::from(current) + i128::from(delta)).clamp(0, i128::from(u64::MAX));

    let mut next = base.clone();
    if next_quantity == 0 {
        next.items.remove(position);
    } else {
        next.items[position].quantity = Some(next_quantity as u64);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::model::CartItem;
    use serde_json::json;

    fn apple_cart() -> Cart {
        Cart {
            items: vec![CartItem::new("apple", 1)],
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_decrement_below_zero_removes_item() {
        let next = adjust(&apple_cart(), "apple", -5);
        assert!(next.items.is_empty());
    }

    #[test]
    fn test_increment() {
        let next = adjust(&apple_cart(), "apple", 2);
        assert_eq!(next.item("apple").unwrap().quantity, Some(3));
    }

    #[test]
    fn test_exact_zero_removes_item() {
        let next = adjust(&apple_cart(), "apple", -1);
        assert!(next.items.is_empty());
    }

    #[test]
    fn test_unknown_item_is_noop() {
        let cart = apple_cart();
        assert_eq!(adjust(&cart, "banana", 1), cart);
    }

    #[test]
    fn test_empty_name_and_zero_delta_are_noops() {
        let cart = apple_cart();
        assert_eq!(adjust(&cart, "", 1), cart);
        assert_eq!(adjust(&cart, "apple", 0), cart);
    }

    #[test]
    fn test_missing_quantity_reads_as_zero() {
        let cart = Cart {
            items: vec![CartItem {
                name: "apple".to_string(),
                quantity: None,
                extra: serde_json::Map::new(),
            }],
            extra: serde_json::Map::new(),
        };
        let next = adjust(&cart, "apple", 2);
        assert_eq!(next.item("apple").unwrap().quantity, Some(2));
        assert!(adjust(&cart, "apple", -1).items.is_empty());
    }

    #[test]
    fn test_other_items_and_fields_untouched() {
        let mut item = CartItem::new("apple", 1);
        item.extra.insert("color".into(), json!("red"));
        let cart = Cart {
            items: vec![CartItem::new("milk", 5), item],
            extra: serde_json::Map::new(),
        };
        let next = adjust(&cart, "apple", 1);

        assert_eq!(next.items[0].name, "milk");
        assert_eq!(next.items[0].quantity, Some(5));
        assert_eq!(next.items[1].extra.get("color"), Some(&json!("red")));
    }
}
