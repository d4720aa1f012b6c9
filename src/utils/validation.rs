use crate::utils::error::{Result, ShopError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ShopError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ShopError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A store file name must be a bare file name inside the data directory.
pub fn validate_file_name(field_name: &str, name: &str) -> Result<()> {
    validate_path(field_name, name)?;

    if name.contains('/') || name.contains('\\') {
        return Err(ShopError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "File name cannot contain path separators".to_string(),
        });
    }

    if name == "." || name == ".." {
        return Err(ShopError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "File name cannot be a directory reference".to_string(),
        });
    }

    Ok(())
}

/// Prices entered by an operator must be finite and not negative.
pub fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() {
        return Err(ShopError::ValidationError {
            message: format!("Price must be a finite number, got {}", price),
        });
    }
    if price < 0.0 {
        return Err(ShopError::ValidationError {
            message: format!("Price cannot be negative, got {}", price),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data_dir", "./data").is_ok());
        assert!(validate_path("data_dir", "").is_err());
        assert!(validate_path("data_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("customers_file", "customers.txt").is_ok());
        assert!(validate_file_name("customers_file", "sub/customers.txt").is_err());
        assert!(validate_file_name("customers_file", "..").is_err());
        assert!(validate_file_name("customers_file", "").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(19.99).is_ok());
        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }
}
