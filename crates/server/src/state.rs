use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::results::{ResultService, SeaOrmResultRepository};

/// Shared handler state. Built once at startup; cloning only bumps the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub results: Arc<ResultService<SeaOrmResultRepository>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmResultRepository::new(db));
        Self { results: Arc::new(ResultService::new(repo)) }
    }
}
