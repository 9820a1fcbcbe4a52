use clap::{Parser, Subcommand};
use secuelas::core::config;
use secuelas::{cli, tui};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "secuelas", about = "Analyst terminal for the Secuelas SQL investigation game")]
struct Args {
    /// Backend base URL (e.g. http://localhost:5001/api)
    #[arg(long)]
    base_url: Option<String>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the current game state as JSON and exit
    State,
    /// Run a script through the backend admin endpoint and print the outcome
    AdminSql {
        /// SQL script to execute
        script: String,
    },
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Logger needs the resolved config, so config errors are reported once it exists
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::SecuelasConfig::default(), Some(e)),
    };
    let config = config::resolve(
        &file_config,
        args.base_url.as_deref(),
        args.log_level.as_deref(),
    );

    // File logger: the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!("Secuelas starting up against {}", config.base_url);

    match args.command {
        None => tui::run(config),
        Some(Command::State) => cli::print_state(&config).await,
        Some(Command::AdminSql { script }) => cli::run_admin_sql(&config, &script).await,
    }
}
