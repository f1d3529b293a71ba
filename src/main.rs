use anyhow::Context;
use clap::Parser;
use shipment_pairs::core::{ConfigProvider, Storage};
use shipment_pairs::utils::error::ErrorSeverity;
use shipment_pairs::utils::{logger, validation::Validate};
use shipment_pairs::{CliConfig, ConsoleStorage, EtlEngine, LocalStorage, ShipmentPipeline, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.config.clone() {
        Some(path) => {
            // 先載入設定檔，日誌等級可能由設定檔決定
            let mut config = TomlConfig::from_file(&path)
                .with_context(|| format!("failed to load config file '{}'", path))?;
            config.apply_overrides(&cli);

            init_logger(&cli, cli.verbose || config.verbose(), config.log_level());
            tracing::info!("📁 Loaded configuration '{}' from {}", config.pipeline.name, path);
            run(config, cli.dry_run).await
        }
        None => {
            init_logger(&cli, cli.verbose, None);
            if cli.verbose {
                tracing::debug!("CLI config: {:?}", cli);
            }
            let dry_run = cli.dry_run;
            run(cli, dry_run).await
        }
    }
}

fn init_logger(cli: &CliConfig, verbose: bool, level: Option<&str>) {
    if cli.log_json {
        logger::init_json_logger(verbose, level);
    } else {
        logger::init_cli_logger(verbose, level);
    }
}

async fn run<C>(config: C, dry_run: bool) -> anyhow::Result<()>
where
    C: ConfigProvider + Validate,
{
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 未指定輸出目錄時直接印出結果
    match config.output_path().map(str::to_string) {
        Some(output_path) => execute(LocalStorage::new(output_path), config, dry_run).await,
        None => execute(ConsoleStorage::new(), config, dry_run).await,
    }
}

async fn execute<S, C>(storage: S, config: C, dry_run: bool) -> anyhow::Result<()>
where
    S: Storage,
    C: ConfigProvider,
{
    let writes_files = config.output_path().is_some();
    let engine = EtlEngine::new(ShipmentPipeline::new(storage, config));

    let outcome = if dry_run {
        engine.dry_run().await.map(|result| {
            tracing::info!(
                "Would write {} export records and {} pair rows from {} source records",
                result.export_only.len(),
                result.shipment_pairs.len(),
                result.source.len()
            );
        })
    } else {
        engine.run().await.map(|output_path| {
            tracing::info!("✅ Shipment ETL completed successfully!");
            if writes_files {
                println!("✅ Shipment ETL completed successfully!");
                println!("📁 Output saved to: {}", output_path);
            }
        })
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Shipment ETL failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
