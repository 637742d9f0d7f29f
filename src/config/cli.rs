use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "designs-adapter", version)]
#[command(about = "Turns MATLAB_OP.csv into designs.csv with objective names and minimize flags")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Data directory (defaults to the directory of this executable)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write the design file (default)
    Translate(TranslateArgs),
    /// Parse a design file and print a JSON summary
    Inspect(InspectArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct TranslateArgs {
    /// Input file name inside the data directory
    #[arg(long)]
    pub input: Option<String>,

    /// Output file name inside the data directory
    #[arg(long)]
    pub output: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct InspectArgs {
    /// Design file to read, relative to the data directory (defaults to the output file)
    #[arg(long)]
    pub file: Option<String>,

    /// Also compute the Pareto front on two metrics, e.g. --front L_D,MTOW
    #[arg(long, value_delimiter = ',')]
    pub front: Option<Vec<String>>,
}

impl CliConfig {
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Translate(TranslateArgs::default()))
    }

    /// Defaults, then the TOML file, then flags.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            settings.apply_toml(&file_config);
        }

        if let Some(dir) = &self.dir {
            settings.directory = Some(dir.clone());
        }
        settings.verbose |= self.verbose;

        if let Some(Command::Translate(args)) = &self.command {
            if let Some(input) = &args.input {
                settings.input = input.clone();
            }
            if let Some(output) = &args.output {
                settings.output = output.clone();
            }
        }

        settings.validate()?;
        Ok(settings)
    }
}
