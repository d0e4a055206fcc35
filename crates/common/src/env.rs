//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the listener is bound.

use std::path::Path;

use tracing::warn;

/// Warn when the front-end entry page is missing; `GET /` will 404 until it exists.
pub async fn ensure_env(static_dir: &str) -> anyhow::Result<()> {
    let index = Path::new(static_dir).join("index.html");
    if tokio::fs::metadata(&index).await.is_err() {
        warn!(%static_dir, "index.html not found; front-end page will 404");
        tokio::fs::create_dir_all(static_dir)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {static_dir}: {e}"))?;
    }
    Ok(())
}
