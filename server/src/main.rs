use std::sync::Arc;

use clap::Parser;
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

use todomvc_core::{InMemoryTodoStore, TodoController};
use todomvc_server::{config::Config, logging, router, seed_items, serve};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();
    logging::init(config.log_format);

    let controller = TodoController::new(Arc::new(InMemoryTodoStore::new()));
    if !config.seed.is_empty() {
        seed_items(&controller, &config.seed)?;
    }

    let addr = config.addr();
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");

    serve(listener, router(controller), shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            warn!(%error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                warn!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
