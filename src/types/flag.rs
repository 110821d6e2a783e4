//! Numeric boolean flag.
//!
//! Several EShop fields (`enabled`, `IsFeatured`, `IsOnSale`) are stored
//! as 0/1 integers rather than booleans because the client-side IndexedDB
//! layer cannot index boolean values. The quirk is part of the storage
//! contract and must not be "fixed" to `bool`.

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`BinaryFlag`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryFlagError {
    /// The value was an integer other than 0 or 1.
    #[error("binary flag must be 0 or 1, got {0}")]
    OutOfRange(u8),
}

/// A 0/1 integer standing in for a boolean.
///
/// Serializes as a bare JSON number. Deserialization rejects any integer
/// other than 0 or 1, and rejects JSON booleans outright (they never
/// appear in stored documents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BinaryFlag(u8);

impl BinaryFlag {
    /// The flag is clear (stored as `0`).
    pub const CLEAR: Self = Self(0);
    /// The flag is set (stored as `1`).
    pub const SET: Self = Self(1);

    /// Whether the flag is set.
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0 == 1
    }

    /// The underlying 0/1 value.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl From<bool> for BinaryFlag {
    fn from(set: bool) -> Self {
        if set { Self::SET } else { Self::CLEAR }
    }
}

impl From<BinaryFlag> for u8 {
    fn from(flag: BinaryFlag) -> Self {
        flag.0
    }
}

impl TryFrom<u8> for BinaryFlag {
    type Error = BinaryFlagError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 | 1 => Ok(Self(value)),
            other => Err(BinaryFlagError::OutOfRange(other)),
        }
    }
}
