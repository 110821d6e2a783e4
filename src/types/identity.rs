//! Backend identity records.

use serde::{Deserialize, Serialize};

use super::base::CosmosBase;

/// An application user on the company side of QBCart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationUser {
    /// Document-store identity and meta-properties.
    #[serde(flatten)]
    pub base: CosmosBase,
    /// The user's display name.
    pub username: String,
    /// The user's email address, typically the same as their id.
    pub email: String,
    /// Whether the user is active.
    pub is_active: bool,
    /// The user's role.
    pub role: String,
    /// The user's permissions.
    pub permissions: Vec<String>,
    /// `ListID`s of allowed sales reps by which to filter the user's
    /// allowed customers.
    pub sales_reps: Vec<String>,
    /// The id of the user's currently selected customer, if any.
    pub selected_customer: String,
}
