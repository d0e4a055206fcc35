use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;
use service::runtime;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Public entry: connect storage, apply the schema, and serve until the listener fails.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    runtime::ensure_env(&cfg.server.static_dir).await?;

    // One pool for the whole process, handed to handlers through `AppState`
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Runtime(format!("migrations failed: {e}")))?;
    info!(event = "migrated", "results schema ready");

    let state = AppState::new(db);
    let app: Router = routes::build_router(state, build_cors(), &cfg.server.static_dir);

    let listener = tokio::net::TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, static_dir = %cfg.server.static_dir, "starting career quiz server");
    axum::serve(listener, app).await?;
    Ok(())
}
