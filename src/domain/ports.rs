use crate::utils::error::Result;

/// Line-oriented text resources addressed by name.
pub trait Storage: Send + Sync {
    fn read_resource(&self, name: &str) -> Result<String>;
    /// Replaces the whole resource. Not atomic.
    fn write_resource(&self, name: &str, contents: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn customers_file(&self) -> &str;
    fn products_file(&self) -> &str;
}
