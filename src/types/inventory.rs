//! Inventory item records mirrored from QuickBooks.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::base::CosmosBase;
use super::flag::BinaryFlag;
use super::shared::Ref;

// =============================================================================
// Item Metadata
// =============================================================================

/// Metadata QBCart tracks for "Item" list objects on top of what
/// QuickBooks returns, mostly for EShop display purposes.
// Allow: each flag is an independent QuickBooks item property with no
// grouping into enums or state machines.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemMetadata {
    /// Whether the item is a parent to others in QuickBooks.
    pub is_category: bool,
    /// Whether the item should be visible in EShop.
    pub is_public: bool,
    /// The `FullName` represented as a relative url.
    pub href: String,
    /// Price charged to the current customer.
    pub customer_price: Decimal,
    /// Whether the item is tracked by location in QuickBooks. Typically
    /// true for inventory that is countable.
    pub has_site_location: bool,
    /// Whether the item represents a set of items.
    pub is_item_set: bool,
    /// Whether the item is part of a set of items.
    pub in_item_set: bool,
    /// Whether the item typically is sold as a case.
    pub is_item_case: bool,
    /// The number of items in a case when sold as a case.
    pub item_case_count: i64,
    /// A fuller description of the product for EShop purposes.
    pub full_desc: String,
    /// Alternative product images for display.
    pub images: Vec<String>,
    /// Product specs.
    pub specs: Vec<String>,
    /// Rank among best sellers, ascending.
    pub best_seller_rank: i64,
    /// 0/1 flag for whether the item should be featured.
    pub is_featured: BinaryFlag,
    /// 0/1 flag for whether the item is on sale.
    pub is_on_sale: BinaryFlag,
    /// The on-sale price when `IsOnSale` is 1.
    pub on_sale_price: Decimal,
}

// =============================================================================
// Item Inventory
// =============================================================================

/// An inventory item mirrored from QuickBooks into the document store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemInventory {
    /// Document-store identity and meta-properties.
    #[serde(flatten)]
    pub base: CosmosBase,
    /// QBCart-tracked metadata.
    #[serde(flatten)]
    pub metadata: ItemMetadata,
    /// Server-assigned list object id, unique within the item list.
    #[serde(rename = "ListID")]
    pub list_id: String,
    /// Time the object was created by QuickBooks.
    pub time_created: DateTime<Utc>,
    /// Time the object was last modified by QuickBooks.
    pub time_modified: DateTime<Utc>,
    /// Opaque revision token. A modify request must present the current
    /// value; the server rejects the write when it is stale.
    pub edit_sequence: String,
    /// Case-insensitive name, not including ancestor names.
    pub name: String,
    /// Name prefixed by the names of each ancestor.
    pub full_name: String,
    /// Value of the barcode on the item.
    pub bar_code_value: String,
    /// Whether the object is currently enabled for use by QuickBooks.
    pub is_active: bool,
    /// The class this item's transactions fall into.
    pub class_ref: Ref,
    /// The list object one level above this one.
    pub parent_ref: Ref,
    /// The number of ancestors.
    pub sublevel: i64,
    /// The manufacturer's part number.
    pub manufacturer_part_number: String,
    /// The unit-of-measure set (a base unit plus related units).
    pub unit_of_measure_set_ref: Ref,
    /// The type of sales tax charged for this item, when taxable.
    pub sales_tax_code_ref: Ref,
    /// Appears in the Description column of a sales form.
    pub sales_desc: String,
    /// Price charged for this item.
    pub sales_price: Decimal,
    /// The income account for sales of this item.
    pub income_account_ref: Ref,
    /// Appears in the Description column when this item is reordered.
    pub purchase_desc: String,
    /// Expected or actual cost when ordering or buying this item.
    pub purchase_cost: Decimal,
    /// The cost-of-goods-sold account tracking original cost.
    #[serde(rename = "COGSAccountRef")]
    pub cogs_account_ref: Ref,
    /// The preferred vendor for this item.
    pub pref_vendor_ref: Ref,
    /// The asset account tracking the current value of inventory.
    pub asset_account_ref: Ref,
    /// Quantity at which QuickBooks reminds the user to reorder.
    pub reorder_point: Decimal,
    /// Maximum number of items in inventory.
    pub max: Decimal,
    /// Items in inventory. `QuantityOnHand` times `AverageCost` is the
    /// item's total value; changing it requires an inventory adjustment,
    /// not an item modify.
    pub quantity_on_hand: Decimal,
    /// Total value divided by `QuantityOnHand`. Can drift from
    /// `PurchaseCost` after inventory adjustments.
    pub average_cost: Decimal,
    /// Items ordered from vendors but not received.
    pub quantity_on_order: Decimal,
    /// Items sold on sales orders but not delivered.
    pub quantity_on_sales_order: Decimal,
    /// User-defined GUID; used by QBCart to match adds to and returns
    /// from QuickBooks.
    #[serde(rename = "ExternalGUID")]
    pub external_guid: Uuid,
}

// =============================================================================
// Product Slider
// =============================================================================

/// An inventory item as displayed in the EShop product slider, with
/// optional ribbon overrides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductSliderItem {
    /// The underlying inventory item.
    #[serde(flatten)]
    pub item: ItemInventory,
    /// Text to display in the ribbon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ribbon_text: Option<String>,
    /// Color of the ribbon text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ribbon_text_color: Option<String>,
    /// Background color of the ribbon.
    #[serde(default, rename = "RibbonBGColor", skip_serializing_if = "Option::is_none")]
    pub ribbon_bg_color: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> ItemInventory {
        ItemInventory {
            base: CosmosBase {
                id: "80001F00-1600000000".to_owned(),
                discriminator: "ITEM-INVENTORY".to_owned(),
                created: "2020-09-13T12:26:40Z".parse().unwrap(),
                created_by: "qbcart-sync".to_owned(),
                ts: 1_600_000_000,
                modified_by: "qbcart-sync".to_owned(),
                etag: "\"7b00cafe\"".to_owned(),
            },
            metadata: ItemMetadata {
                is_public: true,
                href: "/hardware/cl500".to_owned(),
                customer_price: Decimal::new(18_99, 2),
                best_seller_rank: 4,
                is_featured: BinaryFlag::SET,
                is_on_sale: BinaryFlag::CLEAR,
                ..ItemMetadata::default()
            },
            list_id: "80001F00-1600000000".to_owned(),
            name: "CL500".to_owned(),
            full_name: "GermanCars:Mercedes-Benz:CL500".to_owned(),
            is_active: true,
            sublevel: 2,
            sales_price: Decimal::new(19_99, 2),
            quantity_on_hand: Decimal::new(12, 0),
            average_cost: Decimal::new(9_50, 2),
            ..ItemInventory::default()
        }
    }

    #[test]
    fn test_base_and_metadata_flatten() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj["Discriminator"], "ITEM-INVENTORY");
        assert_eq!(obj["_ts"], 1_600_000_000);
        assert_eq!(obj["IsPublic"], true);
        assert_eq!(obj["IsFeatured"], 1);
        assert_eq!(obj["IsOnSale"], 0);
        assert_eq!(obj["BestSellerRank"], 4);
    }

    #[test]
    fn test_account_ref_wire_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "COGSAccountRef",
            "IncomeAccountRef",
            "AssetAccountRef",
            "PrefVendorRef",
            "UnitOfMeasureSetRef",
            "ExternalGUID",
            "QuantityOnHand",
            "ReorderPoint",
        ] {
            assert!(obj.contains_key(key), "missing wire key {key}");
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let item = sample();
        let json = serde_json::to_string(&item).unwrap();
        let parsed: ItemInventory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn test_is_featured_rejects_non_binary() {
        let mut json = serde_json::to_value(sample()).unwrap();
        json["IsFeatured"] = serde_json::json!(2);
        assert!(serde_json::from_value::<ItemInventory>(json).is_err());
    }

    #[test]
    fn test_slider_item_ribbon_optional() {
        let slider = ProductSliderItem {
            item: sample(),
            ribbon_text: Some("Best Seller".to_owned()),
            ribbon_text_color: None,
            ribbon_bg_color: Some("#B71C1C".to_owned()),
        };
        let json = serde_json::to_value(&slider).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj["RibbonText"], "Best Seller");
        assert_eq!(obj["RibbonBGColor"], "#B71C1C");
        assert!(!obj.contains_key("RibbonTextColor"));
        let parsed: ProductSliderItem = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, slider);
    }
}
