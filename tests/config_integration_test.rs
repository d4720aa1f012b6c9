use anyhow::Result;
use shop_invoice::core::ConfigProvider;
use shop_invoice::utils::validation::Validate;
use shop_invoice::{
    make_product, CatalogRegistry, LocalStorage, ProductKind, StoreConfig, StoreSettings,
};
use tempfile::TempDir;

#[test]
fn test_config_file_controls_store_locations() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let temp_path = temp_dir.path().to_str().unwrap();
    let normalized_path = temp_path.replace('\\', "/");

    let config_content = format!(
        r#"
[store]
data_dir = "{}/records"
customers_file = "clients.txt"
products_file = "catalog.txt"
"#,
        normalized_path
    );

    let config_path = format!("{}/shop.toml", temp_path);
    std::fs::write(&config_path, config_content)?;

    let config = StoreConfig::from_file(&config_path)?;
    config.validate()?;
    let settings = StoreSettings::from(&config);

    let storage = LocalStorage::new(settings.data_dir().to_string());
    let mut registry = CatalogRegistry::new();
    registry.add_product(make_product(ProductKind::Clothing, "Scarf", 8.75));
    registry.save(&storage, &settings).into_result()?;

    let written = std::fs::read_to_string(temp_dir.path().join("records").join("catalog.txt"))?;
    assert_eq!(written, "Clothing,Scarf,8.75\n");
    assert!(temp_dir.path().join("records").join("clients.txt").exists());

    Ok(())
}

#[test]
fn test_missing_config_file_is_config_error() {
    let result = StoreConfig::from_file("/definitely/not/here/shop.toml");
    assert!(matches!(
        result,
        Err(shop_invoice::ShopError::ConfigError { .. })
    ));
}

#[test]
fn test_path_separator_in_file_name_rejected() -> Result<()> {
    let config = StoreConfig::from_str("[store]\ncustomers_file = \"../customers.txt\"\n")?;
    assert!(config.validate().is_err());
    Ok(())
}
