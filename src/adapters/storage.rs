use crate::domain::ports::Storage;
use crate::utils::error::{AdapterError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn full_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, name: &str) -> Result<Vec<u8>> {
        let full_path = self.full_path(name);
        std::fs::read(&full_path).map_err(|e| AdapterError::io(full_path, e))
    }

    /// Creates or truncates `name`. The base directory is not created.
    fn write_file(&self, name: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(name);
        let file = File::create(&full_path).map_err(|e| AdapterError::io(&full_path, e))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(data)
            .and_then(|_| writer.flush())
            .map_err(|e| AdapterError::io(&full_path, e))
    }

    fn location(&self, name: &str) -> String {
        self.full_path(name).display().to_string()
    }
}
