//! Supply API Binary
//!
//! Starts the supply-chain REST API, serving the seeded in-memory dataset.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin supply-api
//! ```
//!
//! # Environment Variables
//!
//! - `HTTP_PORT`: HTTP server port (default: 3000)
//! - `BIND_ADDRESS`: bind address (default: 0.0.0.0)
//! - `RUST_LOG`: log level (default: info)

use std::net::SocketAddr;

use supply_api::config::ServerConfig;
use supply_api::infrastructure::http::create_router;
use supply_api::infrastructure::seed::Stores;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    init_tracing();

    tracing::info!("Starting Supply API");

    let config = ServerConfig::from_env();
    tracing::info!(
        http_port = config.http_port,
        bind_address = %config.bind_address,
        "Configuration loaded"
    );

    let stores = Stores::seeded();
    tracing::info!(
        headquarters = stores.headquarters.len(),
        branches = stores.branches.len(),
        suppliers = stores.suppliers.len(),
        products = stores.products.len(),
        orders = stores.orders.len(),
        order_details = stores.order_details.len(),
        deliveries = stores.deliveries.len(),
        order_detail_deliveries = stores.order_detail_deliveries.len(),
        "Entity stores seeded"
    );

    let app = create_router(stores);

    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.http_port).parse()?;
    tracing::info!(%addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET    /health");
    tracing::info!("  GET    /api/<entity>          (list)");
    tracing::info!("  POST   /api/<entity>          (insert)");
    tracing::info!("  GET    /api/<entity>/{{id}}     (get)");
    tracing::info!("  PUT    /api/<entity>/{{id}}     (replace)");
    tracing::info!("  DELETE /api/<entity>/{{id}}     (remove)");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Supply API stopped");
    Ok(())
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses a static directive string that is a compile-time constant guaranteed
/// to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "supply_api=info"
                    .parse()
                    .expect("static directive 'supply_api=info' is valid"),
            ),
        )
        .init();
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed; failing fast at startup
/// beats an unresponsive process.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
