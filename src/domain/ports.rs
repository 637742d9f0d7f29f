use crate::utils::error::Result;

/// Named-file access relative to some base location.
pub trait Storage {
    fn read_file(&self, name: &str) -> Result<Vec<u8>>;
    fn write_file(&self, name: &str, data: &[u8]) -> Result<()>;
    /// Human-readable location of `name`, used for logs and reports.
    fn location(&self, name: &str) -> String;
}
