pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::config::{cli::LocalStorage, toml_config::StoreConfig, StoreSettings};
pub use crate::core::codec::{
    decode_customers, decode_products, encode_customers, encode_products,
};
pub use crate::core::invoice::{Invoice, InvoiceLine};
pub use crate::core::registry::{CatalogRegistry, PersistReport};
pub use crate::domain::model::{
    category_tag, make_customer, make_product, price_for, Customer, Product, ProductKind,
};
pub use crate::utils::error::{Result, ShopError};
