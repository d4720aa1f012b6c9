use clap::Parser;
use shop_invoice::core::intake::{NewCustomer, NewProduct};
use shop_invoice::utils::error::{ErrorSeverity, ShopError};
use shop_invoice::utils::logger;
use shop_invoice::{CatalogRegistry, CliConfig, Command, LocalStorage, StoreSettings};

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting shop-invoice");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("Error: {}", e.user_friendly_message());
        eprintln!("Hint: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> Result<(), ShopError> {
    let settings = config.resolve()?;
    tracing::debug!("Store settings: {:?}", settings);

    let storage = LocalStorage::new(settings.data_dir.clone());

    match &config.command {
        Command::AddCustomer { name, email } => {
            let customer = NewCustomer {
                name: name.clone(),
                email: email.clone(),
            }
            .into_customer();

            let mut registry = CatalogRegistry::load_or_empty(&storage, &settings)?;
            registry.add_customer(customer);
            save(&registry, &storage, &settings)?;
            println!("Customer successfully added.");
        }
        Command::AddProduct { kind, name, price } => {
            let product = NewProduct {
                kind: *kind,
                name: name.clone(),
                price: *price,
            }
            .into_product()?;

            let mut registry = CatalogRegistry::load_or_empty(&storage, &settings)?;
            registry.add_product(product);
            save(&registry, &storage, &settings)?;
            println!("Product successfully added.");
        }
        Command::Check => {
            let registry = CatalogRegistry::load_or_empty(&storage, &settings)?;
            println!(
                "{} customers, {} products",
                registry.customers().len(),
                registry.products().len()
            );
        }
    }

    Ok(())
}

fn save(
    registry: &CatalogRegistry,
    storage: &LocalStorage,
    settings: &StoreSettings,
) -> Result<(), ShopError> {
    let (customers, products) = registry.save(storage, settings).into_result()?;
    tracing::info!("Data saved: {} customers, {} products", customers, products);
    Ok(())
}
