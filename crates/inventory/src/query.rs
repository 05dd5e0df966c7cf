//! Lookups, filters, aggregates and transforms.
//!
//! Every function is a linear scan over the caller's slice in sequence order.
//! "Not found" is `None` (or an empty `Vec`), never an error.

use stockroom_core::{ItemId, Price};

use crate::item::Item;

/// First item whose id equals `id`.
pub fn item_by_id(items: &[Item], id: ItemId) -> Option<&Item> {
    items.iter().find(|item| item.id_typed() == id)
}

/// Price of the first item named exactly `name` (case-sensitive).
pub fn price_by_name(items: &[Item], name: &str) -> Option<Price> {
    items
        .iter()
        .find(|item| item.name() == name)
        .map(Item::price)
}

/// Items whose category equals `category`, in input order.
pub fn items_by_category<'a>(items: &'a [Item], category: &str) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| item.category() == category)
        .collect()
}

/// Total units on hand.
pub fn count_items(items: &[Item]) -> u64 {
    items.iter().map(Item::quantity).sum()
}

/// Sum of `price * quantity` across all items, exact in cents.
///
/// Saturates at `u64::MAX` cents if the inputs are too large to represent.
pub fn total_price(items: &[Item]) -> Price {
    let total = items.iter().try_fold(Price::ZERO, |acc, item| {
        item.line_total().and_then(|line| acc.checked_add(line))
    });

    match total {
        Some(total) => total,
        None => {
            tracing::warn!(items = items.len(), "inventory total overflowed; saturating");
            Price::from_cents(u64::MAX)
        }
    }
}

/// Item names in upper case, one per item, in input order.
pub fn uppercase_names(items: &[Item]) -> Vec<String> {
    items.iter().map(|item| item.name().to_uppercase()).collect()
}
