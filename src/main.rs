use clap::Parser;
use dcp_inventory::app::commands;
use dcp_inventory::utils::logger;
use dcp_inventory::CliConfig;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("Starting dcp-inventory CLI");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = commands::run(&config, &mut out).await {
        tracing::error!("❌ Command failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}
