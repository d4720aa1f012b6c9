pub mod codec;
pub mod intake;
pub mod invoice;
pub mod registry;

pub use crate::domain::model::{
    category_tag, make_customer, make_product, price_for, Customer, Product, ProductKind,
};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
