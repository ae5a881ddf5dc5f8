use sales_dashboard::{
    config::{self, database},
    errors::Result,
    http::{AppState, create_router},
    loader::SeedLoader,
};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenvy::dotenv().ok();

    // 3. Load settings
    let settings = config::load_app_settings()
        .inspect_err(|e| error!("Failed to load settings: {}", e))?;
    let addr = settings.socket_addr()?;

    // 4. Connect to the database and make sure the table exists
    let db = database::create_connection(&database::get_database_url())
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Build the router
    let loader = SeedLoader::new(settings.seed_timeout())?;
    let state = AppState::new(db, loader, &settings.seed_url);
    let app = create_router(state, &settings.base_path);

    // 6. Serve until Ctrl-C
    let listener = TcpListener::bind(addr).await?;
    info!("Server started on {} (routes under {})", addr, settings.base_path);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
