//! Properties common to every object QBCart stores in the document store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields shared by all stored documents, including the meta-properties
/// the store stamps onto every item.
///
/// `id` is only unique within a partition; `(Discriminator, id)` is the
/// one guaranteed-unique key. `_etag` must be echoed back on update so
/// the store can reject conflicting concurrent writes, and `_ts` is the
/// store-assigned last-modified marker.
///
/// Entities embed this with `#[serde(flatten)]`, so the serialized
/// document carries these keys at the top level alongside the domain
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CosmosBase {
    /// Unique id within a partitioned container. Not unique across
    /// partitions.
    #[serde(rename = "id")]
    pub id: String,
    /// The partition key. Together with `id`, uniquely identifies an
    /// object within a partitioned container.
    pub discriminator: String,
    /// Time the object was created/stored by QBCart.
    pub created: DateTime<Utc>,
    /// Entity that created the object via QBCart.
    pub created_by: String,
    /// Unix timestamp of last modification, tracked and set by the store.
    #[serde(rename = "_ts")]
    pub ts: i64,
    /// Entity that last updated the object via QBCart.
    pub modified_by: String,
    /// Entity tag used to enforce consistency on update.
    #[serde(rename = "_etag")]
    pub etag: String,
}

impl CosmosBase {
    /// The `(Discriminator, id)` pair, the only globally unique key.
    #[must_use]
    pub fn unique_key(&self) -> (&str, &str) {
        (&self.discriminator, &self.id)
    }
}
