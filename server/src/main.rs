//! Storefront HTTP server.
//!
//! Catalog, carts, and the order workflow behind an Axum API.

use storefront::{AppState, Config, build_router};
use storefront_core::{CatalogStore, Money, Product, ProductId};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Storefront HTTP Server");

    // Load configuration
    let config = Config::from_env();
    info!(
        host = %config.server.host,
        port = config.server.port,
        "Configuration loaded"
    );

    // Build application state over in-memory stores
    let state = AppState::in_memory();

    if config.seed_demo_data {
        seed_demo_catalog(state.catalog.as_ref()).await?;
    }

    // Build router
    let app = build_router(state);

    // Create server address
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(address = %addr, "Starting HTTP server");

    // Create TCP listener
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Seed a few demo products so the API is explorable out of the box.
async fn seed_demo_catalog(catalog: &dyn CatalogStore) -> Result<(), Box<dyn std::error::Error>> {
    let demo = [
        ("Mechanical Keyboard", 8999, 25, "/images/keyboard.jpg"),
        ("Wireless Mouse", 3499, 40, "/images/mouse.jpg"),
        ("27\" Monitor", 24999, 10, "/images/monitor.jpg"),
    ];

    for (name, cents, stock, image) in demo {
        let product = Product::new(
            ProductId::new(),
            name.to_string(),
            Money::from_cents(cents),
            stock,
            image.to_string(),
        );
        info!(product_id = %product.id, name = %product.name, "seeded demo product");
        catalog.insert_product(product).await?;
    }

    Ok(())
}

/// Graceful shutdown signal handler.
///
/// Waits for Ctrl+C (SIGINT) or SIGTERM (in production environments).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
