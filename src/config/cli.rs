use crate::core::Storage;
use crate::utils::error::{Result, ShopError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn full_path(&self, name: &str) -> PathBuf {
        Path::new(&self.base_path).join(name)
    }
}

impl Storage for LocalStorage {
    fn read_resource(&self, name: &str) -> Result<String> {
        let full_path = self.full_path(name);
        tracing::debug!("Reading {}", full_path.display());
        fs::read_to_string(&full_path).map_err(|source| {
            let resource = full_path.display().to_string();
            match source.kind() {
                ErrorKind::InvalidData => ShopError::InvalidEncoding { resource, source },
                _ => ShopError::ResourceUnavailable { resource, source },
            }
        })
    }

    fn write_resource(&self, name: &str, contents: &str) -> Result<()> {
        let full_path = self.full_path(name);
        tracing::debug!("Writing {} bytes to {}", contents.len(), full_path.display());

        let unavailable = |source| ShopError::ResourceUnavailable {
            resource: full_path.display().to_string(),
            source,
        };

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(unavailable)?;
        }

        fs::write(&full_path, contents).map_err(unavailable)
    }
}
