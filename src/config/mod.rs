#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::paths::{INPUT_FILE, OUTPUT_FILE};
use crate::utils::validation::{self, Validate};
use std::path::PathBuf;
use toml_config::TomlConfig;

/// Effective run settings after merging defaults, the TOML file and command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub directory: Option<PathBuf>,
    pub input: String,
    pub output: String,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            directory: None,
            input: INPUT_FILE.to_string(),
            output: OUTPUT_FILE.to_string(),
            verbose: false,
        }
    }
}

impl Settings {
    pub fn apply_toml(&mut self, config: &TomlConfig) {
        if let Some(directory) = &config.files.directory {
            self.directory = Some(PathBuf::from(directory));
        }
        if let Some(input) = &config.files.input {
            self.input = input.clone();
        }
        if let Some(output) = &config.files.output {
            self.output = output.clone();
        }
        self.verbose |= config.logging.verbose;
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if let Some(directory) = &self.directory {
            validation::validate_path("directory", &directory.to_string_lossy())?;
        }
        validation::validate_file_name("input", &self.input, &["csv"])?;
        validation::validate_file_name("output", &self.output, &["csv"])?;
        validation::validate_distinct("input", &self.input, "output", &self.output)
    }
}
