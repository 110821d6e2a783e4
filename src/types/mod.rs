//! The QBCart data-model catalog.
//!
//! One module per domain area. Everything here is a plain record shape;
//! the only behavior is serialization, light helpers, and validation of
//! closed value sets.

pub mod alert;
pub mod banner;
pub mod base;
pub mod cart;
pub mod company;
pub mod customer;
pub mod flag;
pub mod framework;
pub mod identity;
pub mod inventory;
pub mod shared;

pub use alert::AlertMessage;
pub use banner::InventoryBanner;
pub use base::CosmosBase;
pub use cart::{CartItem, CartItems, CustomPrice, EShopCart};
pub use company::Company;
pub use customer::{Customer, CustomerMetadata, JobStatus, PreferredDeliveryMethod};
pub use flag::{BinaryFlag, BinaryFlagError};
pub use framework::{
    AppDrawerAction, AppDrawerActions, EShopFramework, GlobalSettings, PageSetting, PageSettings,
    SliderSettings,
};
pub use identity::ApplicationUser;
pub use inventory::{ItemInventory, ItemMetadata, ProductSliderItem};
pub use shared::{
    AdditionalContact, AdditionalNote, Address, AddressBlock, Contact, CreditCardInfo, Ref,
    ShipToAddress,
};
