//! Union merge of a base cart with externally delivered delta items.

use std::collections::HashMap;

use crate::cart::model::{Cart, CartItem};

/// Merges `incoming` delta items into `base`, keyed by item name.
///
/// The result contains every name present on either side, with no
/// duplicates. For a name on both sides the record is merged field-wise
/// with incoming fields taking precedence; names only in `incoming` are
/// appended in encounter order. Top-level fields of `base` other than the
/// item list pass through untouched.
///
/// Pure function of its two inputs; applying the same `incoming` twice
/// against the same base is a no-op the second time.
///
/// Should the base itself carry a duplicated name (a violated invariant
/// upstream), the later record wins the stored value and the first
/// occurrence keeps the position.
pub fn reconcile(base: &Cart, incoming: &[CartItem]) -> Cart {
    let mut items: Vec<CartItem> = Vec::with_capacity(base.items.len() + incoming.len());
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(items.capacity());

    for item in &base.items {
        match positions.get(&item.name) {
            Some(&position) => items[position] = item.clone(),
            None => {
                positions.insert(item.name.clone(), items.len());
                items.push(item.clone());
            }
        }
    }

    for item in incoming {
        if item.name.is_empty() {
            continue;
        }
        match positions.get(&item.name) {
            Some(&position) => {
                let merged = items[position].merged_with(item);
                items[position] = merged;
            }
            None => {
                positions.insert(item.name.clone(), items.len());
                items.push(item.clone());
            }
        }
    }

    Cart {
        items,
        extra: base.extra.clone(),
    }
}
