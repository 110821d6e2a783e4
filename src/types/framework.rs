//! Site-wide and per-page configuration for EShop.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::base::CosmosBase;

/// Per-page configuration, keyed by page path.
pub type PageSettings = BTreeMap<String, PageSetting>;

/// The EShop framework document: global settings plus settings for each
/// page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EShopFramework {
    /// Document-store identity and meta-properties.
    #[serde(flatten)]
    pub base: CosmosBase,
    /// Settings applied on every page.
    pub global_settings: GlobalSettings,
    /// Settings for individual pages.
    pub page_settings: PageSettings,
}

/// Settings applied on every EShop page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    /// Html meta tags used on every page.
    pub meta: Vec<String>,
    /// Html style tags used on every page.
    pub styles: Vec<String>,
    /// Html script tags used on every page.
    pub scripts: Vec<String>,
    /// Javascript imports used on every page.
    pub imports: Vec<String>,
    /// Base url to image storage.
    pub images_storage_url: String,
    /// Base url to the site (mainly needed for b2c page redirects).
    pub site_url: String,
    /// Name of the site displayed in the top app bar.
    pub site_name: String,
    /// Interval between client-sync updates in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_interval: Option<i64>,
    /// Company overrides for the product sliders on home and category
    /// pages.
    pub slider_settings: SliderSettings,
}

/// Settings for a single EShop page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSetting {
    /// Html meta tags for the page.
    pub meta: Vec<String>,
    /// Html style tags for the page.
    pub styles: Vec<String>,
    /// Html script tags for the page.
    pub scripts: Vec<String>,
    /// Javascript imports for the page.
    pub imports: Vec<String>,
    /// Title displayed in the browser tab.
    pub title: String,
    /// Actions that appear in the app drawer on this page.
    #[serde(rename = "AppDrawerActions")]
    pub app_drawer_actions: AppDrawerActions,
    /// Whether the page is b2c related.
    #[serde(rename = "isB2C")]
    pub is_b2c: bool,
}

/// App-drawer actions split by authentication state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDrawerActions {
    /// Actions shown when the user is logged in.
    pub logged_in: Vec<AppDrawerAction>,
    /// Actions shown when the user is logged out.
    pub logged_out: Vec<AppDrawerAction>,
}

/// A single app-drawer entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDrawerAction {
    /// The text to display.
    pub text: String,
    /// The icon to display.
    pub icon: String,
    /// Relative path to the page.
    pub href: String,
    /// Whether the action represents the current page.
    pub activated: bool,
}

/// Overrides affecting the product sliders.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderSettings {
    /// Slider speed in milliseconds.
    pub speed: i64,
    /// Max number of best sellers to display.
    pub max_best_sellers: i64,
    /// Max number of featured items to display.
    pub max_featured_items: i64,
    /// Max number of items on sale to display.
    pub max_items_on_sale: i64,
    /// Background color of the best-seller ribbon.
    #[serde(rename = "bestSellersRibbonBGColor")]
    pub best_sellers_ribbon_bg_color: String,
    /// Text color of the best-seller ribbon.
    pub best_sellers_ribbon_text_color: String,
    /// Background color of the featured-items ribbon.
    #[serde(rename = "featuredItemsRibbonBGColor")]
    pub featured_items_ribbon_bg_color: String,
    /// Text color of the featured-items ribbon.
    pub featured_items_text_color: String,
    /// Background color of the items-on-sale ribbon.
    #[serde(rename = "itemsOnSaleRibbonBGColor")]
    pub items_on_sale_ribbon_bg_color: String,
    /// Text color of the items-on-sale ribbon.
    pub items_on_sale_text_color: String,
}
