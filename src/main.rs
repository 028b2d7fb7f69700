//! hello-server entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hello_server::api::{self, AppState};
use hello_server::config::Config;
use hello_server::db::Database;

/// Two-endpoint web service with a startup MySQL connectivity probe.
#[derive(Parser, Debug)]
#[command(name = "hello-server")]
#[command(about = "Two-endpoint web service with a startup MySQL connectivity probe")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Run,

    /// Print the effective configuration.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("hello_server=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Run) | None => cmd_run().await,
    }
}

/// Print the effective configuration.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("HELLO-SERVER - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Port: {}", config.port);
    println!("  DB Host: {}", config.db_host);
    println!("  DB User: {}", config.user);
    println!(
        "  DB Password: {}",
        if config.password.is_empty() { "empty" } else { "present" }
    );
    println!("  DB Name: {}", config.database);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server with the fire-and-forget database probe.
async fn cmd_run() -> anyhow::Result<()> {
    // Load configuration
    info!("Loading configuration...");
    let config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Start the database handshake. Its outcome lands in the log and the
    // handle's state; server startup does not wait on it.
    let db = Database::new();
    {
        let db = db.clone();
        let config = config.clone();
        tokio::spawn(async move {
            db.connect(&config).await;
        });
    }

    let state = AppState::new(db);
    api::serve(&config, state).await?;

    Ok(())
}
