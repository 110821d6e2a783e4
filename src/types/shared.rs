//! Shared value objects from QuickBooks.
//!
//! These aggregates have no identity of their own; they are embedded by
//! value inside the stored entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Reference Types
// =============================================================================

/// A reference to a QuickBooks list object.
///
/// `ListID` and `FullName` are QuickBooks' two competing identifiers for
/// a list object. A `ListID` is assigned by the QuickBooks server and is
/// unique within each particular type of list; a `FullName` is the name
/// prefixed by the names of each ancestor (e.g. `Jones:Kitchen:Cabinets`)
/// and is not case-sensitive.
///
/// When a request supplies both, QuickBooks ignores `FullName`: `ListID`
/// is authoritative. [`Ref::resolve`] carries that rule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ref {
    /// Server-assigned list object id.
    #[serde(rename = "ListID")]
    pub list_id: String,
    /// Ancestor-prefixed name of the list object.
    pub full_name: String,
}

impl Ref {
    /// The identifier consumers should act on.
    ///
    /// `ListID` when populated; `FullName` only as a fallback when no
    /// `ListID` was supplied.
    #[must_use]
    pub fn resolve(&self) -> &str {
        if self.list_id.is_empty() {
            &self.full_name
        } else {
            &self.list_id
        }
    }
}

// =============================================================================
// Address Types
// =============================================================================

/// A QuickBooks address aggregate.
///
/// An address can be given either as `Addr1`-`Addr3` plus the structured
/// elements (`City`, `State`, `PostalCode`), or as the full `Addr1`-`Addr5`
/// block with no other elements. Either way the result must not exceed
/// five printed lines; QuickBooks rejects longer addresses at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    /// The first line of an address.
    pub addr1: String,
    /// The second line of an address.
    pub addr2: String,
    /// The third line of an address.
    pub addr3: String,
    /// The fourth line of an address.
    pub addr4: String,
    /// The fifth line of an address.
    pub addr5: String,
    /// The city name.
    pub city: String,
    /// The state name.
    pub state: String,
    /// The postal code.
    pub postal_code: String,
    /// The country name (US, CA, UK, or AU in host info).
    pub country: String,
    /// Written at the bottom of the address on printed forms.
    pub note: String,
}

/// An address expressed purely as printed lines, as returned under the
/// `BillAddressBlock`/`ShipAddressBlock` aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressBlock {
    /// The first line of an address.
    pub addr1: String,
    /// The second line of an address.
    pub addr2: String,
    /// The third line of an address.
    pub addr3: String,
    /// The fourth line of an address.
    pub addr4: String,
    /// The fifth line of an address.
    pub addr5: String,
}

/// A named ship-to address of a customer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipToAddress {
    /// The address itself.
    #[serde(flatten)]
    pub address: Address,
    /// Case-insensitive name of the list object, unique among siblings.
    pub name: String,
    /// Whether this is the default ship-to address.
    pub default_ship_to: bool,
}

// =============================================================================
// Payment Types
// =============================================================================

/// A customer's credit-card information.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreditCardInfo {
    /// Card number, masked with lowercase `x` and no dashes
    /// (e.g. `xxxxxxxxxxxx1234`), as required since qbXML spec 6.0.
    pub credit_card_number: String,
    /// The month when the card expires.
    pub expiration_month: u32,
    /// The year when the card expires.
    pub expiration_year: u32,
    /// The name on the card.
    pub name_on_card: String,
    /// The address associated with the card.
    pub credit_card_address: String,
    /// The postal code associated with the card's address.
    pub credit_card_postal_code: String,
}

// =============================================================================
// Contact & Note Types
// =============================================================================

/// An additional contact entry. No details given by QuickBooks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdditionalContact {
    pub contact_name: String,
    pub contact_value: String,
}

/// A dated note attached to a customer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdditionalNote {
    /// The id of the note.
    #[serde(rename = "NoteID")]
    pub note_id: i64,
    /// Date of the note.
    pub date: DateTime<Utc>,
    /// The note text.
    pub note: String,
}

/// A QuickBooks contact record for a customer or vendor.
///
/// Carries its own `ListID`/`EditSequence` identity: modifying a contact
/// requires presenting the current `EditSequence`, and the server rejects
/// the request when it is stale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    /// Server-assigned list object id.
    #[serde(rename = "ListID")]
    pub list_id: String,
    /// Time the object was created by QuickBooks.
    pub time_created: DateTime<Utc>,
    /// Time the object was last modified by QuickBooks.
    pub time_modified: DateTime<Utc>,
    /// Opaque revision token; compared, never interpreted.
    pub edit_sequence: String,
    /// The name of the contact person.
    pub contact: String,
    /// A formal reference, such as Mr. or Dr., preceding the name.
    pub salutation: String,
    /// First name.
    pub first_name: String,
    /// Middle name.
    pub middle_name: String,
    /// Last name.
    pub last_name: String,
    /// Job title.
    pub job_title: String,
    /// No details given by QuickBooks.
    pub additional_contacts: Vec<AdditionalContact>,
}
