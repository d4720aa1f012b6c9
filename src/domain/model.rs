/// The fixed set of product kinds. `Generic` is the untyped fallback and
/// only ever appears through decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductKind {
    Electronics,
    Clothing,
    Groceries,
    Generic,
}

impl ProductKind {
    /// Category tag used for display and as the persisted type discriminator.
    pub fn tag(&self) -> &'static str {
        match self {
            ProductKind::Electronics => "Electronics",
            ProductKind::Clothing => "Clothing",
            ProductKind::Groceries => "Groceries",
            ProductKind::Generic => "Product",
        }
    }

    /// Total mapping: unknown tags (and "Product") fall back to `Generic`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Electronics" => ProductKind::Electronics,
            "Clothing" => ProductKind::Clothing,
            "Groceries" => ProductKind::Groceries,
            _ => ProductKind::Generic,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    kind: ProductKind,
    name: String,
    unit_price: f64,
}

impl Product {
    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
    email: String,
}

impl Customer {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Builds a product as given. Sign of the price is not checked here; the
/// operator input path does that before calling in.
pub fn make_product(kind: ProductKind, name: impl Into<String>, price: f64) -> Product {
    Product {
        kind,
        name: name.into(),
        unit_price: price,
    }
}

pub fn make_customer(name: impl Into<String>, email: impl Into<String>) -> Customer {
    Customer {
        name: name.into(),
        email: email.into(),
    }
}

pub fn price_for(product: &Product, quantity: u32) -> f64 {
    product.unit_price * f64::from(quantity)
}

pub fn category_tag(product: &Product) -> &'static str {
    product.kind.tag()
}
