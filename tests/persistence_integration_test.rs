use anyhow::Result;
use shop_invoice::core::intake::{NewProduct, NewProductKind};
use shop_invoice::{
    make_customer, make_product, price_for, CatalogRegistry, LocalStorage, ProductKind, ShopError,
    StoreSettings,
};
use tempfile::TempDir;

fn storage_in(temp_dir: &TempDir) -> LocalStorage {
    LocalStorage::new(temp_dir.path().to_str().unwrap().to_string())
}

#[test]
fn test_save_and_load_round_trip_on_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = storage_in(&temp_dir);
    let settings = StoreSettings::default();

    let mut registry = CatalogRegistry::new();
    registry.add_customer(make_customer("Jane Doe", "jane@x.com"));
    registry.add_customer(make_customer("Raj Patel", "raj@shop.in"));
    registry.add_product(make_product(ProductKind::Electronics, "Laptop", 999.5));
    registry.add_product(make_product(ProductKind::Clothing, "Jacket", 49.99));
    registry.add_product(make_product(ProductKind::Groceries, "Rice", 20.0));
    registry.add_product(make_product(ProductKind::Generic, "Gift Card", 25.0));

    let report = registry.save(&storage, &settings);
    assert!(report.is_success());

    let customers_text = std::fs::read_to_string(temp_dir.path().join("customers.txt"))?;
    assert_eq!(customers_text, "Jane Doe,jane@x.com\nRaj Patel,raj@shop.in\n");

    let products_text = std::fs::read_to_string(temp_dir.path().join("products.txt"))?;
    assert_eq!(
        products_text,
        "Electronics,Laptop,999.5\nClothing,Jacket,49.99\nGroceries,Rice,20\nProduct,Gift Card,25\n"
    );

    let mut loaded = CatalogRegistry::new();
    let (customers, products) = loaded.load(&storage, &settings).into_result()?;
    assert_eq!((customers, products), (2, 4));
    assert_eq!(loaded.customers(), registry.customers());
    assert_eq!(loaded.products(), registry.products());
    assert_eq!(price_for(loaded.product(0).unwrap(), 3), 2998.5);

    Ok(())
}

#[test]
fn test_load_from_hand_written_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("customers.txt"),
        "Jane Doe,jane@x.com,extra\ngarbage line\nAl,al@a.com\n",
    )?;
    std::fs::write(
        temp_dir.path().join("products.txt"),
        "Toys,Kite,12\nGroceries,Refund,-3\nlonely\n",
    )?;

    let mut registry = CatalogRegistry::new();
    let report = registry.load(&storage_in(&temp_dir), &StoreSettings::default());
    assert!(report.is_success());

    assert_eq!(registry.customers().len(), 2);
    assert_eq!(registry.customers()[0].email(), "jane@x.com,extra");
    assert_eq!(registry.customers()[1].name(), "Al");

    assert_eq!(registry.products().len(), 2);
    assert_eq!(registry.products()[0].kind(), ProductKind::Generic);
    assert_eq!(registry.products()[1].unit_price(), -3.0);

    Ok(())
}

#[test]
fn test_missing_files_are_resource_unavailable() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut registry = CatalogRegistry::new();
    let report = registry.load(&storage_in(&temp_dir), &StoreSettings::default());

    assert!(matches!(
        report.customers,
        Err(ShopError::ResourceUnavailable { .. })
    ));
    assert!(matches!(
        report.products,
        Err(ShopError::ResourceUnavailable { .. })
    ));
    assert!(registry.customers().is_empty());

    Ok(())
}

#[test]
fn test_save_creates_data_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let nested = temp_dir.path().join("store").join("data");
    let storage = LocalStorage::new(nested.to_str().unwrap().to_string());

    let mut registry = CatalogRegistry::new();
    registry.add_customer(make_customer("Mia", "mia@m.com"));
    assert!(registry.save(&storage, &StoreSettings::default()).is_success());
    assert!(nested.join("customers.txt").exists());
    assert_eq!(std::fs::read_to_string(nested.join("products.txt"))?, "");

    Ok(())
}

#[test]
fn test_operator_input_rejects_negative_price_but_decode_keeps_it() -> Result<()> {
    let input = NewProduct {
        kind: NewProductKind::Electronics,
        name: "Cable".to_string(),
        price: -2.0,
    };
    assert!(input.into_product().is_err());

    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("products.txt"), "Electronics,Cable,-2\n")?;
    std::fs::write(temp_dir.path().join("customers.txt"), "")?;

    let mut registry = CatalogRegistry::new();
    registry
        .load(&storage_in(&temp_dir), &StoreSettings::default())
        .into_result()?;
    assert_eq!(registry.products()[0].unit_price(), -2.0);

    Ok(())
}

#[test]
fn test_non_utf8_store_is_reported_as_encoding_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("customers.txt"), b"Jos\xe9,jose@x.com\n")?;
    std::fs::write(temp_dir.path().join("products.txt"), "Clothing,Hat,15\n")?;

    let mut registry = CatalogRegistry::new();
    let report = registry.load(&storage_in(&temp_dir), &StoreSettings::default());

    let err = report.customers.as_ref().unwrap_err();
    assert!(matches!(err, ShopError::InvalidEncoding { .. }));
    assert!(err.user_friendly_message().contains("not UTF-8"));
    assert_eq!(*report.products.as_ref().unwrap(), 1);

    Ok(())
}

#[test]
fn test_fresh_data_directory_loads_as_empty_store() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = StoreSettings::default();
    let registry = CatalogRegistry::load_or_empty(&storage_in(&temp_dir), &settings)?;
    assert!(registry.customers().is_empty());
    assert!(registry.products().is_empty());

    std::fs::write(temp_dir.path().join("customers.txt"), b"\xff\xfe\n")?;
    assert!(matches!(
        CatalogRegistry::load_or_empty(&storage_in(&temp_dir), &settings),
        Err(ShopError::InvalidEncoding { .. })
    ));

    Ok(())
}

#[test]
fn test_invoice_over_loaded_catalog() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("customers.txt"), "Jane Doe,jane@x.com\n")?;
    std::fs::write(
        temp_dir.path().join("products.txt"),
        "Electronics,Laptop,999.5\nGroceries,Milk,1.25\n",
    )?;

    let settings = StoreSettings::default();
    let registry = CatalogRegistry::load_or_empty(&storage_in(&temp_dir), &settings)?;
    let mut invoice = registry.start_invoice(0)?;
    registry.add_invoice_line(&mut invoice, 0, 3)?;
    assert!(registry.add_invoice_line(&mut invoice, 5, 1).is_err());
    assert!(registry.add_invoice_line(&mut invoice, 1, 0).is_err());

    assert_eq!(invoice.lines().len(), 1);
    let (product, price) = registry
        .invoice_line_price(&invoice.lines()[0])
        .expect("line refers to a loaded product");
    assert_eq!(product.name(), "Laptop");
    assert_eq!(price, 2998.5);

    Ok(())
}
