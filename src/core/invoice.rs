use crate::core::registry::CatalogRegistry;
use crate::core::{price_for, Customer, Product};
use crate::utils::error::{Result, ShopError};

/// One selected product, by index into the registry's product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvoiceLine {
    pub product: usize,
    pub quantity: u32,
}

/// A customer plus the products chosen for them. Holds indices only; the
/// registry stays the owner of every entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    customer: usize,
    lines: Vec<InvoiceLine>,
}

impl Invoice {
    pub fn customer(&self) -> usize {
        self.customer
    }

    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl CatalogRegistry {
    pub fn start_invoice(&self, customer: usize) -> Result<Invoice> {
        if self.customer(customer).is_none() {
            return Err(ShopError::ValidationError {
                message: format!(
                    "Unknown customer {}, the registry holds {} customers",
                    customer,
                    self.customers().len()
                ),
            });
        }
        Ok(Invoice {
            customer,
            lines: Vec::new(),
        })
    }

    /// Appends a line after checking the product index and that the
    /// quantity is at least one. The same product may appear more than once.
    pub fn add_invoice_line(
        &self,
        invoice: &mut Invoice,
        product: usize,
        quantity: u32,
    ) -> Result<()> {
        if self.product(product).is_none() {
            return Err(ShopError::ValidationError {
                message: format!(
                    "Unknown product {}, the registry holds {} products",
                    product,
                    self.products().len()
                ),
            });
        }
        if quantity == 0 {
            return Err(ShopError::ValidationError {
                message: "Quantity must be greater than 0".to_string(),
            });
        }

        invoice.lines.push(InvoiceLine { product, quantity });
        tracing::debug!(
            "Invoice for customer {}: added product {} x{}",
            invoice.customer,
            product,
            quantity
        );
        Ok(())
    }

    pub fn invoice_customer(&self, invoice: &Invoice) -> Option<&Customer> {
        self.customer(invoice.customer)
    }

    /// The product on a line and what that line costs.
    pub fn invoice_line_price(&self, line: &InvoiceLine) -> Option<(&Product, f64)> {
        self.product(line.product)
            .map(|product| (product, price_for(product, line.quantity)))
    }
}
