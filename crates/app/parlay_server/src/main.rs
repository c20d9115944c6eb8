//! Parlay webhook server binary.
//!
//! Binds a TCP listener, mounts the webhook and health routes, and serves
//! until interrupted.

use clap::Parser;
use tracing::info;

use parlay_api::config::ApiConfig;

/// CLI arguments for the webhook server.
#[derive(Parser, Debug)]
#[command(name = "parlay_server", about = "Parlay fulfillment webhook server")]
struct Args {
    /// Address to bind the HTTP listener. Overrides `BIND_ADDR`.
    #[arg(long)]
    bind_addr: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,parlay_api=debug,parlay_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let mut config = ApiConfig::from_env();
    if let Some(bind_addr) = args.bind_addr {
        config.bind_addr = bind_addr;
    }

    info!(bind_addr = %config.bind_addr, "starting parlay_server");

    let state = parlay_api::AppState::new(config.clone());
    let app = parlay_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "webhook endpoint listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives an interrupt signal.
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("received shutdown signal, exiting");
}
