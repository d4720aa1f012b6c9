//! Text format for the customer and product stores.
//!
//! One record per line, fields separated by a single comma, no quoting:
//!
//! ```text
//! <name>,<email>
//! <categoryTag>,<name>,<unitPrice>
//! ```
//!
//! Commas inside names or emails are not escaped. A customer email keeps
//! everything after the first comma, but a product name with a comma will
//! shift its price field on the next decode.

use crate::domain::model::{
    category_tag, make_customer, make_product, price_for, Customer, Product, ProductKind,
};
use crate::utils::error::{Result, ShopError};

pub fn encode_customers(customers: &[Customer]) -> String {
    let mut out = String::new();
    for customer in customers {
        out.push_str(customer.name());
        out.push(',');
        out.push_str(customer.email());
        out.push('\n');
    }
    out
}

/// The price column is `price_for(product, 1)` in shortest round-trip form,
/// so `20.0` is written as `20` and reads back exactly.
pub fn encode_products(products: &[Product]) -> String {
    let mut out = String::new();
    for product in products {
        out.push_str(&format!(
            "{},{},{}\n",
            category_tag(product),
            product.name(),
            price_for(product, 1)
        ));
    }
    out
}

pub fn decode_customers(text: &str) -> Vec<Customer> {
    let mut customers = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match line.split_once(',') {
            Some((name, email)) => customers.push(make_customer(name, email)),
            None => tracing::debug!("Skipping customer line {}: no delimiter", index + 1),
        }
    }
    customers
}

/// Fails on the first price that is not a number; nothing from `text` is
/// returned in that case.
pub fn decode_products(text: &str) -> Result<Vec<Product>> {
    let mut products = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let Some((tag, remainder)) = line.split_once(',') else {
            tracing::debug!("Skipping product line {}: no category delimiter", index + 1);
            continue;
        };
        let Some((name, price_text)) = remainder.split_once(',') else {
            tracing::debug!("Skipping product line {}: no price delimiter", index + 1);
            continue;
        };

        let price = parse_price(price_text).map_err(|source| ShopError::NumericParseFailure {
            line: index + 1,
            value: price_text.to_string(),
            source,
        })?;

        products.push(make_product(ProductKind::from_tag(tag), name, price));
    }
    Ok(products)
}

// Surrounding whitespace is tolerated; trailing garbage is not.
fn parse_price(text: &str) -> std::result::Result<f64, std::num::ParseFloatError> {
    text.trim().parse::<f64>()
}
