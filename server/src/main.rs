mod console_notifier;
mod console_transport;
mod server_config;
mod session_registry;

use clap::Parser;
use tokio::io::BufReader;

use common::config::{ConfigManager, GameConfig};
use common::{log, logger};
use console_notifier::ConsoleNotifier;
use console_transport::ConsoleTransport;
use session_registry::SessionRegistry;

#[derive(Parser)]
#[command(name = "connect_four_server")]
struct Args {
    #[arg(long, default_value = server_config::DEFAULT_CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| server_config::LOG_PREFIX.to_string());
    logger::init_logger(prefix, args.verbose);

    let config_manager = ConfigManager::<GameConfig>::from_yaml_file(&args.config);
    let config = config_manager.load()?;
    log!(
        "Loaded config from {}: {}x{} board, run of {}, reminders {}",
        config_manager.path().display(),
        config.board.rows,
        config.board.columns,
        config.board.run_length,
        if config.reminder.enabled { "on" } else { "off" }
    );

    let registry = SessionRegistry::new(ConsoleNotifier::stdout(), config.session_settings());
    let transport = ConsoleTransport::new(registry.clone(), config);

    log!("Connect Four server reading commands from stdin");

    tokio::select! {
        result = transport.run(BufReader::new(tokio::io::stdin())) => {
            if let Err(e) = result {
                log!("Failed to read input: {}", e);
            }
        }
        result = tokio::signal::ctrl_c() => {
            match result {
                Ok(()) => log!("Shutdown signal received"),
                Err(e) => log!("Failed to listen for Ctrl+C: {}", e),
            }
        }
    }

    registry.shutdown().await;
    log!("Server shut down gracefully");

    Ok(())
}
