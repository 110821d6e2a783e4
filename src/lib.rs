//! QBCart Types - Shared data-model library.
//!
//! This crate describes the record shapes exchanged between the two halves
//! of QBCart:
//! - the QuickBooks-integrated backend, which mirrors QuickBooks list
//!   objects into a partitioned document store, and
//! - the EShop frontend, which reads those records for cart, pricing, and
//!   site-configuration purposes.
//!
//! # Architecture
//!
//! The crate contains only types - no I/O, no database access, no HTTP
//! clients. Persistence, synchronization, and query logic live in the
//! services that consume these shapes.
//!
//! Field names on these types are wire/storage keys, not arbitrary
//! identifiers: serialized output must match the documents already in the
//! store byte for byte, which is why serde rename attributes appear
//! throughout.
//!
//! # Modules
//!
//! - [`types`] - The full catalog, organized by domain area.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
