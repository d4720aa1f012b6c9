use crate::core::ConfigProvider;
use crate::utils::error::{Result, ShopError};
use crate::utils::validation::{validate_file_name, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DATA_DIR: &str = ".";
pub const DEFAULT_CUSTOMERS_FILE: &str = "customers.txt";
pub const DEFAULT_PRODUCTS_FILE: &str = "products.txt";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    pub store: StoreSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSection {
    pub data_dir: Option<String>,
    pub customers_file: Option<String>,
    pub products_file: Option<String>,
}

impl StoreConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ShopError::ConfigError {
            message: format!("Failed to read config file '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: StoreConfig = toml::from_str(content)?;
        Ok(config)
    }
}

impl ConfigProvider for StoreConfig {
    fn data_dir(&self) -> &str {
        self.store.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR)
    }

    fn customers_file(&self) -> &str {
        self.store
            .customers_file
            .as_deref()
            .unwrap_or(DEFAULT_CUSTOMERS_FILE)
    }

    fn products_file(&self) -> &str {
        self.store
            .products_file
            .as_deref()
            .unwrap_or(DEFAULT_PRODUCTS_FILE)
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<()> {
        validate_store_files(self)
    }
}

/// Shared by every `ConfigProvider`: the data directory must be usable and
/// the two store files must be distinct bare file names.
pub fn validate_store_files<C: ConfigProvider>(config: &C) -> Result<()> {
    validate_path("store.data_dir", config.data_dir())?;
    validate_file_name("store.customers_file", config.customers_file())?;
    validate_file_name("store.products_file", config.products_file())?;

    if config.customers_file() == config.products_file() {
        return Err(ShopError::InvalidConfigValueError {
            field: "store.products_file".to_string(),
            value: config.products_file().to_string(),
            reason: "Customers and products must be stored in different files".to_string(),
        });
    }

    Ok(())
}
