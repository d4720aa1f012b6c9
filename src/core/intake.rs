use crate::core::{make_customer, make_product, Customer, Product, ProductKind};
use crate::utils::error::{Result, ShopError};
use crate::utils::validation::validate_price;

/// Product kinds an operator can create directly. `Generic` is left out; it
/// only comes from decoding an untyped or unknown tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum NewProductKind {
    Electronics,
    Clothing,
    Groceries,
}

impl From<NewProductKind> for ProductKind {
    fn from(kind: NewProductKind) -> Self {
        match kind {
            NewProductKind::Electronics => ProductKind::Electronics,
            NewProductKind::Clothing => ProductKind::Clothing,
            NewProductKind::Groceries => ProductKind::Groceries,
        }
    }
}

impl TryFrom<u8> for NewProductKind {
    type Error = ShopError;

    /// Numbered choices 1 to 3, in menu order.
    fn try_from(choice: u8) -> Result<Self> {
        match choice {
            1 => Ok(NewProductKind::Electronics),
            2 => Ok(NewProductKind::Clothing),
            3 => Ok(NewProductKind::Groceries),
            other => Err(ShopError::ValidationError {
                message: format!("Invalid product type {}, expected 1, 2 or 3", other),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub kind: NewProductKind,
    pub name: String,
    pub price: f64,
}

impl NewProduct {
    pub fn into_product(self) -> Result<Product> {
        validate_price(self.price)?;
        Ok(make_product(self.kind.into(), self.name, self.price))
    }
}

#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}

impl NewCustomer {
    pub fn into_customer(self) -> Customer {
        make_customer(self.name, self.email)
    }
}
