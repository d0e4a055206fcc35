use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use crate::results::domain::{ResultSummary, SubmitInput};
use crate::results::repository::ResultRepository;

/// Application service for quiz results. Append-only: there is no update or
/// delete path, and a missing username is never an error.
pub struct ResultService<R: ResultRepository> {
    repo: Arc<R>,
}

impl<R: ResultRepository> ResultService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn exists(&self, username: &str) -> Result<bool, ServiceError> {
        self.repo.exists(username).await
    }

    /// Store a new row and return its id. Repeated payloads create repeated rows.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn submit(&self, input: SubmitInput) -> Result<i32, ServiceError> {
        let created = self.repo.insert(input.into()).await?;
        info!(id = created.id, profile = %created.profile, "result_stored");
        Ok(created.id)
    }

    /// Summaries for `username`, most recent first. No username, no query.
    pub async fn list(&self, username: Option<&str>) -> Result<Vec<ResultSummary>, ServiceError> {
        let username = match username {
            Some(u) if !u.is_empty() => u,
            _ => {
                debug!("list_results_without_username");
                return Ok(Vec::new());
            }
        };
        let rows = self.repo.list_by_username(username).await?;
        Ok(rows.into_iter().map(ResultSummary::from).collect())
    }
}
