//! Customer records mirrored from QuickBooks.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::base::CosmosBase;
use super::shared::{
    AdditionalContact, AdditionalNote, Address, AddressBlock, Contact, CreditCardInfo, Ref,
    ShipToAddress,
};

// =============================================================================
// Customer Metadata
// =============================================================================

/// Metadata QBCart tracks for "Customer" list objects on top of what
/// QuickBooks returns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerMetadata {
    /// Whether the customer is past due on payment terms.
    pub past_due: bool,
    /// Whether a recent payment was declined.
    pub declined_payment: bool,
    /// Reformatted version of `FullName`, used mainly in search results.
    pub long_name: String,
    /// Abbreviated version of the address, used mainly in search results.
    pub location: String,
}

// =============================================================================
// Status Enums
// =============================================================================

/// Status information about a sub-customer; used in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JobStatus {
    #[default]
    None,
    Awarded,
    Closed,
    InProgress,
    NotAwarded,
    Pending,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Awarded => write!(f, "Awarded"),
            Self::Closed => write!(f, "Closed"),
            Self::InProgress => write!(f, "InProgress"),
            Self::NotAwarded => write!(f, "NotAwarded"),
            Self::Pending => write!(f, "Pending"),
        }
    }
}

impl std::str::FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Self::None),
            "Awarded" => Ok(Self::Awarded),
            "Closed" => Ok(Self::Closed),
            "InProgress" => Ok(Self::InProgress),
            "NotAwarded" => Ok(Self::NotAwarded),
            "Pending" => Ok(Self::Pending),
            _ => Err(format!("invalid job status: {s}")),
        }
    }
}

/// How the customer prefers to receive forms. No details given by
/// QuickBooks beyond the value set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PreferredDeliveryMethod {
    #[default]
    None,
    Email,
    Fax,
}

impl std::fmt::Display for PreferredDeliveryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Email => write!(f, "Email"),
            Self::Fax => write!(f, "Fax"),
        }
    }
}

impl std::str::FromStr for PreferredDeliveryMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Self::None),
            "Email" => Ok(Self::Email),
            "Fax" => Ok(Self::Fax),
            _ => Err(format!("invalid preferred delivery method: {s}")),
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer mirrored from QuickBooks into the document store.
///
/// Carries the QuickBooks list-object identity (`ListID`, `Name`,
/// `FullName`, `EditSequence`), the contact/address aggregates, billing
/// fields, and job-tracking fields, plus the store identity in
/// [`CosmosBase`] and the QBCart-side [`CustomerMetadata`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    /// Document-store identity and meta-properties.
    #[serde(flatten)]
    pub base: CosmosBase,
    /// QBCart-tracked metadata.
    #[serde(flatten)]
    pub metadata: CustomerMetadata,
    /// Server-assigned list object id, unique within the customer list.
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
    /// Name prefixed by the names of each ancestor, e.g.
    /// `Jones:Kitchen:Cabinets`. Not case-sensitive.
    pub full_name: String,
    /// Whether the object is currently enabled for use by QuickBooks.
    pub is_active: bool,
    /// The class this customer's transactions fall into.
    pub class_ref: Ref,
    /// The list object one level above this one.
    pub parent_ref: Ref,
    /// The number of ancestors.
    pub sublevel: i64,
    /// The customer's business name, as used on invoices and checks.
    pub company_name: String,
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
    /// Billing address (at most five printed lines).
    pub bill_address: Address,
    /// Billing address as returned printed lines.
    pub bill_address_block: AddressBlock,
    /// Shipping address (at most five printed lines).
    pub ship_address: Address,
    /// Shipping address as returned printed lines.
    pub ship_address_block: AddressBlock,
    /// The customer's ship-to addresses.
    pub ship_to_address: Vec<ShipToAddress>,
    /// Telephone number.
    pub phone: String,
    /// Alternative telephone number.
    pub alt_phone: String,
    /// Fax number.
    pub fax: String,
    /// E-mail address.
    pub email: String,
    /// The cc address to use for this customer.
    pub cc: String,
    /// The name of a contact person.
    pub contact: String,
    /// The name of an alternate contact person.
    pub alt_contact: String,
    /// No details given by QuickBooks.
    pub additional_contact_ref: Vec<AdditionalContact>,
    /// No details given by QuickBooks.
    pub contacts_ret: Vec<Contact>,
    /// The customer's type on the CustomerType list.
    pub customer_type_ref: Ref,
    /// The payment terms associated with this customer.
    pub terms_ref: Ref,
    /// The sales representative assigned to this customer.
    pub sales_rep_ref: Ref,
    /// Money owed by the customer. Compare with `TotalBalance`.
    pub balance: Decimal,
    /// Balance including all of this customer's jobs (sub-customers).
    pub total_balance: Decimal,
    /// The sales-tax code used for items related to this customer.
    pub sales_tax_code_ref: Ref,
    /// The sales-tax item used to calculate a single sales tax.
    pub item_sales_tax_ref: Ref,
    /// The customer's resale number, if any. Does not affect reports or
    /// sales tax calculations.
    pub resale_number: String,
    /// Account number, shown in the chart of accounts when the account
    /// numbers preference is on.
    pub account_number: String,
    /// Positive credit limit; no limit when unset.
    pub credit_limit: Decimal,
    /// The customer's preferred payment method.
    pub preferred_payment_method_ref: Ref,
    /// The customer's credit-card information.
    pub credit_card_info: CreditCardInfo,
    /// Status of a sub-customer job; used in reports.
    pub job_status: JobStatus,
    /// Date work for a sub-customer was started.
    pub job_start_date: DateTime<Utc>,
    /// Date work for a sub-customer is expected to be complete.
    pub job_projected_end_date: DateTime<Utc>,
    /// Date work for a sub-customer was completed.
    pub job_end_date: DateTime<Utc>,
    /// Short job description for a sub-customer.
    pub job_desc: String,
    /// The job's category on the JobType list.
    pub job_type_ref: Ref,
    /// No details given by QuickBooks.
    pub notes: String,
    /// No details given by QuickBooks.
    pub additional_notes_ret: Vec<AdditionalNote>,
    /// No details given by QuickBooks.
    pub preferred_delivery_method: PreferredDeliveryMethod,
    /// Custom price level applied to this customer's sales forms.
    pub price_level_ref: Ref,
    /// User-defined GUID attached by QBCart.
    #[serde(rename = "ExternalGUID")]
    pub external_guid: Uuid,
    /// The currency used to display amounts for this customer.
    pub currency_ref: Ref,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Customer {
        Customer {
            base: CosmosBase {
                id: "80000A1B-1612345678".to_owned(),
                discriminator: "CUSTOMER".to_owned(),
                created: "2021-02-03T08:30:00Z".parse().unwrap(),
                created_by: "qbcart-sync".to_owned(),
                ts: 1_612_345_678,
                modified_by: "qbcart-sync".to_owned(),
                etag: "\"2c00e3d1\"".to_owned(),
            },
            metadata: CustomerMetadata {
                past_due: true,
                declined_payment: false,
                long_name: "Jones, Kitchen".to_owned(),
                location: "Springfield, IL".to_owned(),
            },
            list_id: "80000A1B-1612345678".to_owned(),
            name: "Kitchen".to_owned(),
            full_name: "Jones:Kitchen".to_owned(),
            is_active: true,
            sublevel: 1,
            parent_ref: Ref {
                list_id: "80000A1A-1612345600".to_owned(),
                full_name: "Jones".to_owned(),
            },
            balance: Decimal::new(1250_50, 2),
            total_balance: Decimal::new(1250_50, 2),
            credit_limit: Decimal::new(5000, 0),
            job_status: JobStatus::InProgress,
            preferred_delivery_method: PreferredDeliveryMethod::Email,
            ..Customer::default()
        }
    }

    #[test]
    fn test_base_fields_survive_flatten() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "id",
            "Discriminator",
            "Created",
            "CreatedBy",
            "_ts",
            "ModifiedBy",
            "_etag",
        ] {
            assert!(obj.contains_key(key), "missing base key {key}");
        }
        // Metadata keys flatten alongside.
        assert_eq!(obj["PastDue"], true);
        assert_eq!(obj["LongName"], "Jones, Kitchen");
    }

    #[test]
    fn test_quickbooks_wire_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "ListID",
            "EditSequence",
            "FullName",
            "ParentRef",
            "Sublevel",
            "Balance",
            "CreditLimit",
            "CreditCardInfo",
            "JobStatus",
            "PreferredDeliveryMethod",
            "ExternalGUID",
        ] {
            assert!(obj.contains_key(key), "missing wire key {key}");
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let customer = sample();
        let json = serde_json::to_string(&customer).unwrap();
        let parsed: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, customer);
    }

    #[test]
    fn test_job_status_closed_set() {
        assert_eq!(
            serde_json::from_str::<JobStatus>("\"NotAwarded\"").unwrap(),
            JobStatus::NotAwarded
        );
        assert!(serde_json::from_str::<JobStatus>("\"Abandoned\"").is_err());
        assert!(serde_json::from_str::<JobStatus>("\"inprogress\"").is_err());
    }

    #[test]
    fn test_preferred_delivery_method_closed_set() {
        assert_eq!(
            serde_json::from_str::<PreferredDeliveryMethod>("\"Fax\"").unwrap(),
            PreferredDeliveryMethod::Fax
        );
        assert!(serde_json::from_str::<PreferredDeliveryMethod>("\"Pigeon\"").is_err());
    }

    #[test]
    fn test_enum_display_from_str() {
        for status in [
            JobStatus::None,
            JobStatus::Awarded,
            JobStatus::Closed,
            JobStatus::InProgress,
            JobStatus::NotAwarded,
            JobStatus::Pending,
        ] {
            assert_eq!(status.to_string().parse::<JobStatus>().unwrap(), status);
        }
        assert!("Unknown".parse::<JobStatus>().is_err());
    }
}
