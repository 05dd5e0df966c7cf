//! Seed data and JSON loading.

use std::collections::HashSet;

use stockroom_core::{DomainError, DomainResult, Price};

use crate::item::Item;

/// The grocery dataset the driver uses when no file is configured.
pub fn sample_inventory() -> Vec<Item> {
    vec![
        Item::new(1u64, "apple", Price::from_cents(175), "fruit", 100),
        Item::new(2u64, "banana", Price::from_cents(25), "fruit", 137),
        Item::new(3u64, "orange", Price::from_cents(100), "fruit", 10),
        Item::new(4u64, "broccoli", Price::from_cents(300), "vegetable", 67),
        Item::new(5u64, "carrots", Price::from_cents(225), "vegetable", 94),
        Item::new(6u64, "milk", Price::from_cents(575), "dairy", 90),
        Item::new(7u64, "cheddar", Price::from_cents(400), "dairy", 63),
        Item::new(8u64, "sourdough", Price::from_cents(550), "grains", 81),
    ]
}

/// Parse a JSON array of item records.
///
/// Duplicate ids are kept (lookups resolve to the first) but logged.
pub fn load_inventory_json(json: &str) -> DomainResult<Vec<Item>> {
    let items: Vec<Item> = serde_json::from_str(json)
        .map_err(|e| DomainError::validation(format!("inventory json: {e}")))?;

    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(item.id_typed()) {
            tracing::warn!(id = %item.id_typed(), name = item.name(), "duplicate item id in inventory");
        }
    }

    tracing::debug!(items = items.len(), "loaded inventory");
    Ok(items)
}
