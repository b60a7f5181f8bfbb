use clap::Parser;
use destination_advisor::utils::{logger, validation::Validate};
use destination_advisor::{app, server, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_server_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting destination-advisor");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let state = app::build_state(&settings).await?;
    let port = settings.resolve_port(cli.port);

    if cli.check {
        tracing::info!("✅ Configuration and datasets are valid");
        println!("✅ Configuration and datasets are valid");
        println!("📁 Places: {} ({})", state.datasets.places.len(), settings.places_path().display());
        println!("📁 Problem template: {}", settings.problem_path().display());
        println!("📚 Corpus: {}", settings.corpus());
        println!("🔌 Port: {}", port);
        return Ok(());
    }

    server::serve(state, port).await?;
    Ok(())
}
