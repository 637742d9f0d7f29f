use crate::utils::error::{AdapterError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AdapterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AdapterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Checks that `file` is a bare file name (no directory part) with one of the allowed extensions.
pub fn validate_file_name(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    validate_path(field_name, file)?;

    let path = std::path::Path::new(file);
    if path.components().count() != 1 || path.file_name().is_none() {
        return Err(AdapterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "Expected a file name without directories; use --dir for the location"
                .to_string(),
        });
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(extension)
            if allowed_extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(extension)) =>
        {
            Ok(())
        }
        Some(extension) => Err(AdapterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(AdapterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_distinct(field_a: &str, a: &str, field_b: &str, b: &str) -> Result<()> {
    if a == b {
        return Err(AdapterError::ConfigError {
            message: format!("{} and {} must name different files ({})", field_a, field_b, a),
        });
    }
    Ok(())
}
