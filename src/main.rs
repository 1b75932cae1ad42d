use clap::Parser;
use venue_table::utils::error::ErrorSeverity;
use venue_table::utils::{logger, validation::Validate};
use venue_table::{CliConfig, LocalStorage, ReadmePipeline, RenderEngine};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // logging
    logger::init_cli_logger(cli.verbose, config.log_level.as_deref());

    tracing::info!("Starting venue-table");
    tracing::debug!("Run config: {:?}", config);

    // config must be valid before any file is read
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let output_path = config.output_path.clone();
    let storage = LocalStorage::new(".");
    let pipeline = ReadmePipeline::new(storage, config)?;
    let engine = RenderEngine::new(pipeline);

    let outcome = if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - {} will not be written", output_path);
        engine.preview().await.and_then(|(result, document)| {
            tracing::info!("Rows:\n{}", serde_json::to_string_pretty(&result.rows)?);
            print!("{}", document);
            Ok(output_path)
        })
    } else {
        engine.run().await
    };

    match outcome {
        Ok(path) if !cli.dry_run => {
            tracing::info!("✅ Table rendered successfully");
            println!("✅ Wrote {}", path);
        }
        Ok(_) => {}
        Err(e) => {
            // full details go to the log
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // exit code by severity
            std::process::exit(match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            });
        }
    }

    Ok(())
}
