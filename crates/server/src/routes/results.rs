use axum::{extract::{rejection::JsonRejection, Path, Query, State}, Json};
use serde::{Deserialize, Serialize};
use service::results::{ResultSummary, SubmitInput};
use tracing::info;

use crate::{errors::JsonApiError, state::AppState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResultsQuery {
    /// Exact username; absent or empty yields an empty list
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckUsernameResponse { pub exists: bool }

#[derive(Debug, Serialize)]
pub struct SubmitResponse { pub success: bool, pub id: i32 }

#[derive(Debug, Serialize)]
pub struct ResultsResponse { pub results: Vec<ResultSummary> }

#[utoipa::path(
    get, path = "/api/check_username/{username}", tag = "results",
    params(("username" = String, Path, description = "Username to look up")),
    responses(
        (status = 200, description = "Lookup OK", body = crate::openapi::CheckUsernameDoc),
        (status = 500, description = "Storage Failure")
    )
)]
pub async fn check_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<CheckUsernameResponse>, JsonApiError> {
    let exists = state.results.exists(&username).await?;
    info!(%username, exists, "check_username");
    Ok(Json(CheckUsernameResponse { exists }))
}

#[utoipa::path(
    post, path = "/api/submit", tag = "results",
    request_body = crate::openapi::SubmitRequestDoc,
    responses(
        (status = 200, description = "Stored", body = crate::openapi::SubmitResponseDoc),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Validation Error"),
        (status = 500, description = "Storage Failure")
    )
)]
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<SubmitInput>, JsonRejection>,
) -> Result<Json<SubmitResponse>, JsonApiError> {
    let Json(input) = payload?;
    let username = input.username.clone();
    let id = state.results.submit(input).await?;
    info!(%username, id, "submit_result");
    Ok(Json(SubmitResponse { success: true, id }))
}

#[utoipa::path(
    get, path = "/api/results", tag = "results",
    params(ResultsQuery),
    responses(
        (status = 200, description = "List OK", body = crate::openapi::ResultsResponseDoc),
        (status = 500, description = "Storage Failure")
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Query(q): Query<ResultsQuery>,
) -> Result<Json<ResultsResponse>, JsonApiError> {
    let results = state.results.list(q.username.as_deref()).await?;
    info!(username = q.username.as_deref().unwrap_or(""), count = results.len(), "list_results");
    Ok(Json(ResultsResponse { results }))
}
