use crate::utils::error::{AdapterError, Result};
use std::path::{Path, PathBuf};

pub const INPUT_FILE: &str = "MATLAB_OP.csv";
pub const OUTPUT_FILE: &str = "designs.csv";

/// Directory holding the running executable, with symlinks resolved.
pub fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| AdapterError::io("<current executable>", e))?;
    let exe = exe.canonicalize().map_err(|e| AdapterError::io(&exe, e))?;

    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| AdapterError::ConfigError {
            message: format!("Executable path has no parent directory: {}", exe.display()),
        })
}

pub fn resolve_base_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) => {
            tracing::debug!("Using data directory override: {}", dir.display());
            Ok(dir.to_path_buf())
        }
        None => program_dir(),
    }
}
