pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use toml_config::{validate_store_files, StoreConfig};

#[cfg(feature = "cli")]
use crate::core::intake::NewProductKind;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

/// Where the two stores live, after the config file and flags are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    pub data_dir: String,
    pub customers_file: String,
    pub products_file: String,
}

impl From<&StoreConfig> for StoreSettings {
    fn from(config: &StoreConfig) -> Self {
        Self {
            data_dir: config.data_dir().to_string(),
            customers_file: config.customers_file().to_string(),
            products_file: config.products_file().to_string(),
        }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self::from(&StoreConfig::default())
    }
}

impl ConfigProvider for StoreSettings {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn customers_file(&self) -> &str {
        &self.customers_file
    }

    fn products_file(&self) -> &str {
        &self.products_file
    }
}

impl Validate for StoreSettings {
    fn validate(&self) -> Result<()> {
        validate_store_files(self)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "shop-invoice")]
#[command(about = "Customer and product records for a single retail store")]
pub struct CliConfig {
    /// Path to a TOML file with a [store] section
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory holding the customer and product stores
    #[arg(long)]
    pub data_dir: Option<String>,

    #[arg(long)]
    pub customers_file: Option<String>,

    #[arg(long)]
    pub products_file: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Register a customer and save both stores
    AddCustomer {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Register a product and save both stores
    AddProduct {
        #[arg(long, value_enum)]
        kind: NewProductKind,
        #[arg(long)]
        name: String,
        #[arg(long, allow_negative_numbers = true)]
        price: f64,
    },
    /// Load both stores and report how many records each holds
    Check,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Reads the config file if one was given, then applies flag overrides.
    pub fn resolve(&self) -> Result<StoreSettings> {
        let file_config = match &self.config {
            Some(path) => StoreConfig::from_file(path)?,
            None => StoreConfig::default(),
        };

        let mut settings = StoreSettings::from(&file_config);
        if let Some(dir) = &self.data_dir {
            settings.data_dir = dir.clone();
        }
        if let Some(file) = &self.customers_file {
            settings.customers_file = file.clone();
        }
        if let Some(file) = &self.products_file {
            settings.products_file = file.clone();
        }

        settings.validate()?;
        Ok(settings)
    }
}
