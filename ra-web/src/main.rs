use ra_logic::{migrate, LogicFactory};
use ra_web::{init_tracing, router, shutdown_signal, AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = AppConfig::load("dev")?;
    let settings = config.settings()?;
    tracing::info!(profile = config.profile(), "starting RedditAnalytic");

    let pool = ra_data_sqlx::connect(&settings.database_url, settings.max_connections).await?;
    migrate(&pool).await?;

    let app = router(AppState::new(LogicFactory::with_defaults(pool)));

    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!(addr = %settings.server_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}
