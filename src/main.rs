use std::path::PathBuf;

use clap::{Parser, Subcommand};

use innkeeper::config::Settings;
use innkeeper::db::run_migrations;
use innkeeper::logger::init_logger;
use innkeeper::server::Server;

/// Hotel management backend
#[derive(Parser, Debug)]
#[command(name = "innkeeper")]
#[command(about = "Hotel management backend: bookings, guests, staff")]
#[command(version)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the web server (default)
    Serve,
    /// Run pending database migrations
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;
    init_logger(&settings.logger)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => Server::new(settings).run().await,
        Commands::Migrate => {
            run_migrations(&settings.database.url)?;
            Ok(())
        }
    }
}
