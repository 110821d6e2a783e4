//! Cart and per-customer pricing records for EShop.
//!
//! Cart documents are partitioned per customer: a [`CartItem`]'s `id` is
//! the inventory item it refers to, while its `Discriminator` carries the
//! owning customer. These records use camelCase wire keys, unlike the
//! QuickBooks-mirrored entities.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::base::CosmosBase;

/// Items in a customer's cart, keyed by inventory item id.
pub type CartItems = BTreeMap<String, CartItem>;

/// An item in a customer's cart in EShop.
///
/// `id` names the inventory item; `Discriminator` is
/// `CART-ITEM-{customerId}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Document-store identity and meta-properties.
    #[serde(flatten)]
    pub base: CosmosBase,
    /// Number of the inventory item requested for purchase.
    pub quantity: Decimal,
    /// Sales price, reflecting either current retail or any custom
    /// pricing the customer has.
    pub price: Decimal,
    /// Timestamp of when the item was added; used to sort the cart.
    pub sort_order: i64,
}

impl CartItem {
    /// The partition key for a customer's cart items.
    #[must_use]
    pub fn discriminator_for(customer_id: &str) -> String {
        format!("CART-ITEM-{customer_id}")
    }
}

/// A customer's cart in EShop.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EShopCart {
    /// Document-store identity and meta-properties.
    #[serde(flatten)]
    pub base: CosmosBase,
    /// Items in the cart, keyed by inventory item id.
    pub items: CartItems,
    /// Unix timestamp of the last cart update. Controlled client-side
    /// only; unrelated to the store-stamped `_ts`.
    pub last_updated: i64,
}

/// A customer's custom pricing for an inventory item in EShop.
///
/// `id` names the inventory item; `Discriminator` is
/// `CUSTOM-PRICE-{customerId}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomPrice {
    /// Document-store identity and meta-properties.
    #[serde(flatten)]
    pub base: CosmosBase,
    /// The customer's custom price.
    pub price: Decimal,
}

impl CustomPrice {
    /// The partition key for a customer's custom prices.
    #[must_use]
    pub fn discriminator_for(customer_id: &str) -> String {
        format!("CUSTOM-PRICE-{customer_id}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(id: &str, quantity: i64, price: Decimal, sort_order: i64) -> CartItem {
        CartItem {
            base: CosmosBase {
                id: id.to_owned(),
                discriminator: CartItem::discriminator_for("CUST-7"),
                created: "2021-05-20T16:00:00Z".parse().unwrap(),
                created_by: "eshop".to_owned(),
                ts: 1_621_526_400,
                modified_by: "eshop".to_owned(),
                etag: "\"1a002b3c\"".to_owned(),
            },
            quantity: Decimal::from(quantity),
            price,
            sort_order,
        }
    }

    #[test]
    fn test_cart_item_roundtrip_keeps_all_fields() {
        // Scenario: ITEM-42 in CUST-7's cart, quantity 3 at 19.99.
        let cart_item = item("ITEM-42", 3, Decimal::new(19_99, 2), 1_621_526_400);
        let json = serde_json::to_string(&cart_item).unwrap();
        let parsed: CartItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart_item);
        assert_eq!(parsed.base.discriminator, "CART-ITEM-CUST-7");
        assert_eq!(parsed.base.id, "ITEM-42");
    }

    #[test]
    fn test_cart_item_wire_keys() {
        let json = serde_json::to_value(item("ITEM-42", 3, Decimal::ONE, 7)).unwrap();
        let obj = json.as_object().unwrap();
        // camelCase domain keys next to the flattened base keys.
        for key in ["quantity", "price", "sortOrder", "id", "Discriminator", "_etag"] {
            assert!(obj.contains_key(key), "missing wire key {key}");
        }
    }

    #[test]
    fn test_cart_keyed_by_item_id() {
        let mut items = CartItems::new();
        items.insert("ITEM-42".to_owned(), item("ITEM-42", 3, Decimal::ONE, 1));
        items.insert("ITEM-43".to_owned(), item("ITEM-43", 1, Decimal::TWO, 2));
        let cart = EShopCart {
            base: CosmosBase {
                id: "CUST-7".to_owned(),
                discriminator: "ESHOP-CART".to_owned(),
                ..CosmosBase::default()
            },
            items,
            last_updated: 1_621_526_400,
        };
        let json = serde_json::to_value(&cart).unwrap();
        assert!(json["items"].as_object().unwrap().contains_key("ITEM-42"));
        assert_eq!(json["lastUpdated"], 1_621_526_400);
        let parsed: EShopCart = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, cart);
    }

    #[test]
    fn test_discriminator_conventions() {
        assert_eq!(CartItem::discriminator_for("CUST-7"), "CART-ITEM-CUST-7");
        assert_eq!(
            CustomPrice::discriminator_for("CUST-7"),
            "CUSTOM-PRICE-CUST-7"
        );
    }

    #[test]
    fn test_custom_price_roundtrip() {
        let custom = CustomPrice {
            base: CosmosBase {
                id: "ITEM-42".to_owned(),
                discriminator: CustomPrice::discriminator_for("CUST-7"),
                ..CosmosBase::default()
            },
            price: Decimal::new(17_49, 2),
        };
        let json = serde_json::to_string(&custom).unwrap();
        let parsed: CustomPrice = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, custom);
    }
}
