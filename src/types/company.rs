//! Company info records.

use serde::{Deserialize, Serialize};

use super::base::CosmosBase;

/// Info about a QBCart company.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Company {
    /// Document-store identity and meta-properties.
    #[serde(flatten)]
    pub base: CosmosBase,
    /// The name of the site.
    pub site_name: String,
}
