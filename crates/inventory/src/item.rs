use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ItemId, Price};

/// A single inventory record.
///
/// Immutable once built; queries hand out `&Item` borrows of the caller's slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    price: Price,
    category: String,
    quantity: u64,
}

impl Item {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: Price,
        category: impl Into<String>,
        quantity: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: category.into(),
            quantity,
        }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Value of the units on hand (`price * quantity`); `None` on overflow.
    pub fn line_total(&self) -> Option<Price> {
        self.price.checked_mul(self.quantity)
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk() -> Item {
        Item::new(6u64, "milk", Price::from_cents(575), "dairy", 90)
    }

    #[test]
    fn accessors_expose_fields() {
        let item = milk();
        assert_eq!(item.id_typed(), ItemId::new(6));
        assert_eq!(*Entity::id(&item), ItemId::new(6));
        assert_eq!(item.name(), "milk");
        assert_eq!(item.price(), Price::from_cents(575));
        assert_eq!(item.category(), "dairy");
        assert_eq!(item.quantity(), 90);
    }

    #[test]
    fn line_total_multiplies_price_by_quantity() {
        assert_eq!(milk().line_total(), Some(Price::from_cents(51_750)));
        let empty_shelf = Item::new(9u64, "tofu", Price::from_cents(300), "protein", 0);
        assert_eq!(empty_shelf.line_total(), Some(Price::ZERO));
    }

    #[test]
    fn line_total_overflow_is_none() {
        let item = Item::new(1u64, "gold", Price::from_cents(u64::MAX), "metal", 2);
        assert_eq!(item.line_total(), None);
    }

    #[test]
    fn json_shape_matches_record_fields() {
        let json = serde_json::to_value(milk()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 6,
                "name": "milk",
                "price": 5.75,
                "category": "dairy",
                "quantity": 90
            })
        );
    }
}
