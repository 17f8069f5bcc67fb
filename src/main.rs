mod api;
mod bmi;
mod config;
mod storage;

use crate::api::AppState;
use crate::config::AppConfig;
use crate::storage::{JsonFileStore, StudentStore};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("🚀 Starting Student Health Records API");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Data file: {:?}", config.storage.data_path);
    info!("   - Server: {}:{}", config.server.host, config.server.port);

    // Initialize the student store
    info!("💾 Initializing student store...");
    let store = Arc::new(JsonFileStore::new(&config.storage.data_path));
    store.initialize()?;
    let student_count = store.load()?.len();
    info!("✅ Student store ready ({} records)", student_count);

    // Create application state
    let state = AppState { store };

    // Build router with modular routes
    let app = api::router(state).layer(TraceLayer::new_for_http());

    // Start server
    let port = std::env::var("PORT").unwrap_or_else(|_| config.server.port.to_string());
    let addr = format!("{}:{}", config.server.host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET    /                            - Service message");
    info!("   GET    /about                       - Dataset description");
    info!("   GET    /health                      - Health check");
    info!("   GET    /load_data                   - Full student collection");
    info!("   GET    /students/{{student_id}}       - Single student record");
    info!("   GET    /sort                        - Sorted records");
    info!("   POST   /create                      - Create student record");
    info!("   PUT    /edit/{{student_id}}           - Update student record");
    info!("   DELETE /student/delete/{{student_id}} - Delete student record");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
