use anyhow::Context;
use clap::Parser;
use designs_adapter::config::cli::Command;
use designs_adapter::utils::logger;
use designs_adapter::utils::paths::resolve_base_dir;
use designs_adapter::{AdapterError, CliConfig, DesignTable, LocalStorage, Settings, Translator};

fn main() {
    let cli = CliConfig::parse();

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(settings.verbose);
    tracing::debug!("Settings: {:?}", settings);

    if let Err(err) = run(&cli.command(), &settings) {
        match err.downcast_ref::<AdapterError>() {
            Some(e) => {
                tracing::error!(
                    "❌ {:#} (Category: {:?}, Severity: {:?})",
                    err,
                    e.category(),
                    e.severity()
                );
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(e.exit_code());
            }
            None => {
                tracing::error!("❌ {:#}", err);
                std::process::exit(1);
            }
        }
    }
}

fn run(command: &Command, settings: &Settings) -> anyhow::Result<()> {
    let base_dir = resolve_base_dir(settings.directory.as_deref())
        .context("resolving the data directory")?;

    match command {
        Command::Translate(_) => {
            let storage = LocalStorage::new(&base_dir);
            let translator =
                Translator::with_files(storage, settings.input.as_str(), settings.output.as_str());
            let report = translator
                .translate()
                .with_context(|| format!("translating {} in {}", settings.input, base_dir.display()))?;
            tracing::info!(
                "✅ {} design rows written to {} ({} bytes)",
                report.input_lines,
                report.output_path,
                report.bytes_written
            );
        }
        Command::Inspect(args) => {
            let file = args.file.as_deref().unwrap_or(settings.output.as_str());
            let path = base_dir.join(file);
            let table = DesignTable::from_file(&path)
                .with_context(|| format!("inspecting {}", path.display()))?;
            let mut summary = table.summary();
            if let Some(names) = &args.front {
                summary.pareto_front = Some(table.front_for(names)?);
            }
            let summary = serde_json::to_string_pretty(&summary)
                .context("serializing inspect summary")?;
            println!("{}", summary);
        }
    }

    Ok(())
}
