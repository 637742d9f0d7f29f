pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::LocalStorage;
pub use config::Settings;
pub use core::translate::Translator;
pub use domain::model::{DesignTable, InspectSummary, ParetoFront, TranslateReport};
pub use utils::error::{AdapterError, Result};
