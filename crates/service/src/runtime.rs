//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so binary crates can call
//! `service::runtime::ensure_env` without depending directly on `common`.

/// Make sure the static front-end directory exists; warn if the entry page is missing.
pub async fn ensure_env(static_dir: &str) -> anyhow::Result<()> {
    common::env::ensure_env(static_dir).await
}
