use fitlog::api::routes::create_routes;
use fitlog::config::{run_migrations, AppConfig, DatabaseConfig};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let app_config = AppConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    let pool = db_config.create_pool().await?;
    run_migrations(&pool).await?;

    let app = create_routes(pool, &app_config);

    let listener = TcpListener::bind(app_config.server_address()).await?;
    info!("fitlog server starting on http://{}", app_config.server_address());
    info!("Health check available at http://{}/health", app_config.server_address());

    axum::serve(listener, app).await?;

    Ok(())
}
