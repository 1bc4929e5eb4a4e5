use clap::Parser;
use lootbox::core::{ConfigProvider, Storage};
use lootbox::utils::error::ErrorSeverity;
use lootbox::utils::{logger, validation::Validate};
use lootbox::{
    CliConfig, ConsoleNotifier, HttpGameSources, LocalStorage, PanelBoard, SearchConfig,
    SearchOrchestrator, SearchOutcome,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting lootbox search");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match SearchConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            }
        }
        None => SearchConfig::default(),
    };
    cli.apply_overrides(&mut config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let sources = HttpGameSources::from_config(&config)?;
    let orchestrator = SearchOrchestrator::new(sources, PanelBoard::new(), ConsoleNotifier)
        .with_fan_out(config.fan_out());

    let outcome = orchestrator.run_search(&cli.query).await;
    if outcome == SearchOutcome::Rejected {
        std::process::exit(2);
    }

    let storage = LocalStorage::new(config.output_dir().to_string());
    let page = orchestrator.target().to_page();
    if let Err(e) = storage.write_file(config.page_name(), page.as_bytes()).await {
        tracing::error!(
            "❌ Writing the result page failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        let exit_code = if e.severity() >= ErrorSeverity::High { 1 } else { 0 };
        std::process::exit(exit_code);
    }

    let page_path = storage.full_path(config.page_name());
    tracing::info!("📁 Result page saved to: {}", page_path);

    match outcome {
        SearchOutcome::Failed => {
            eprintln!("❌ The search could not be completed; see the log for details");
            std::process::exit(1);
        }
        SearchOutcome::MetadataError(message) => {
            println!("⚠️  {}", message);
            println!("📁 Page saved to: {}", page_path);
        }
        _ => println!("✅ Results saved to: {}", page_path),
    }

    Ok(())
}
