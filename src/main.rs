//! `client-registry` server binary.

use clap::Parser;
use client_registry::lifecycle::{setup_tracing, shutdown_signal, RegistrySystem};
use client_registry::service::ClientService;
use client_registry::store::SqliteStore;
use client_registry::{http, Config};
use std::path::PathBuf;
use tracing::info;

/// Client registry HTTP server
#[derive(Parser, Debug)]
#[command(name = "client-registry")]
#[command(about = "Client records with an append-only operation history")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    listen: String,

    /// SQLite database file; omit to keep data in memory
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Mailbox capacity of each in-memory actor
    #[arg(short, long, default_value = "32")]
    mailbox: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let args = Args::parse();
    let config = Config::builder()
        .listen_addr(args.listen)
        .database(args.database)
        .mailbox_size(args.mailbox)
        .build();

    info!(?config, "Starting client registry");

    match &config.database {
        Some(path) => {
            let service = ClientService::with_store(SqliteStore::open(path)?);
            http::serve(service, &config.listen_addr, shutdown_signal()).await?;
        }
        None => {
            let system = RegistrySystem::new(config.mailbox_size);
            let service = ClientService::with_store(system.store());
            http::serve(service, &config.listen_addr, shutdown_signal()).await?;
            system.shutdown().await?;
        }
    }

    info!("Stopped");
    Ok(())
}
