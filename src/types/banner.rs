//! Promotional banner configuration for EShop inventory pages.

use serde::{Deserialize, Serialize};

use super::base::CosmosBase;
use super::flag::BinaryFlag;

/// A banner shown on an inventory category or path in EShop.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryBanner {
    /// Document-store identity and meta-properties.
    #[serde(flatten)]
    pub base: CosmosBase,
    /// Path to which the banner belongs.
    pub path: String,
    /// Banner image path for desktop views.
    pub desktop_path: String,
    /// Banner image path for mobile views.
    pub mobile_path: String,
    /// 0/1 flag for whether the banner should be shown.
    pub enabled: BinaryFlag,
    /// Sort order among all banners to be shown.
    pub sort_order: i64,
}
