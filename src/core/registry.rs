use crate::core::codec::{decode_customers, decode_products, encode_customers, encode_products};
use crate::core::{ConfigProvider, Customer, Product, Storage};
use crate::utils::error::{Result, ShopError};

/// Outcome of a save or load, one entry per store. The two stores are
/// handled independently so one failing does not stop the other.
#[derive(Debug)]
pub struct PersistReport {
    pub customers: Result<usize>,
    pub products: Result<usize>,
}

impl PersistReport {
    pub fn is_success(&self) -> bool {
        self.customers.is_ok() && self.products.is_ok()
    }

    pub fn first_error(&self) -> Option<&ShopError> {
        self.customers
            .as_ref()
            .err()
            .or_else(|| self.products.as_ref().err())
    }

    pub fn into_result(self) -> Result<(usize, usize)> {
        Ok((self.customers?, self.products?))
    }
}

/// In-memory holder of every customer and product, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct CatalogRegistry {
    customers: Vec<Customer>,
    products: Vec<Product>,
}

impl CatalogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_customer(&mut self, customer: Customer) -> usize {
        self.customers.push(customer);
        self.customers.len() - 1
    }

    pub fn add_product(&mut self, product: Product) -> usize {
        self.products.push(product);
        self.products.len() - 1
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn customer(&self, index: usize) -> Option<&Customer> {
        self.customers.get(index)
    }

    pub fn product(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Writes a full snapshot of both stores, replacing their contents.
    pub fn save<S: Storage, C: ConfigProvider>(&self, storage: &S, config: &C) -> PersistReport {
        let customers = storage
            .write_resource(config.customers_file(), &encode_customers(&self.customers))
            .map(|()| self.customers.len());
        log_outcome("Saved", config.customers_file(), &customers);

        let products = storage
            .write_resource(config.products_file(), &encode_products(&self.products))
            .map(|()| self.products.len());
        log_outcome("Saved", config.products_file(), &products);

        PersistReport { customers, products }
    }

    /// Appends everything decoded from both stores. Existing entries are
    /// kept, so loading twice duplicates records.
    pub fn load<S: Storage, C: ConfigProvider>(
        &mut self,
        storage: &S,
        config: &C,
    ) -> PersistReport {
        let customers = storage
            .read_resource(config.customers_file())
            .map(|text| decode_customers(&text))
            .map(|decoded| {
                let count = decoded.len();
                self.customers.extend(decoded);
                count
            });
        log_outcome("Loaded", config.customers_file(), &customers);

        let products = storage
            .read_resource(config.products_file())
            .and_then(|text| decode_products(&text))
            .map(|decoded| {
                let count = decoded.len();
                self.products.extend(decoded);
                count
            });
        log_outcome("Loaded", config.products_file(), &products);

        PersistReport { customers, products }
    }

    /// Loads both stores into a fresh registry. A store file that does not
    /// exist yet counts as empty; any other failure is returned so callers
    /// never save over records that failed to load.
    pub fn load_or_empty<S: Storage, C: ConfigProvider>(storage: &S, config: &C) -> Result<Self> {
        let mut registry = Self::new();
        let report = registry.load(storage, config);

        for outcome in [report.customers, report.products] {
            match outcome {
                Ok(_) => {}
                Err(ShopError::ResourceUnavailable { resource, source })
                    if source.kind() == std::io::ErrorKind::NotFound =>
                {
                    tracing::info!("{} does not exist yet, starting empty", resource);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(registry)
    }
}

fn log_outcome(action: &str, resource: &str, outcome: &Result<usize>) {
    match outcome {
        Ok(count) => tracing::info!("{} {} records from {}", action, count, resource),
        Err(e) => tracing::warn!("{} nothing for {}: {}", action, resource, e),
    }
}
