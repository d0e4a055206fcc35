use std::collections::BTreeMap;

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CheckUsernameDoc { pub exists: bool }

#[derive(ToSchema)]
pub struct SubmitRequestDoc {
    pub username: String,
    /// Category name to numeric score; any set of keys
    pub scores: BTreeMap<String, f64>,
    pub profile: String,
    pub energy: i64,
    pub math: i64,
    pub tech: i64,
    pub career: i64,
}

#[derive(ToSchema)]
pub struct SubmitResponseDoc { pub success: bool, pub id: i32 }

#[derive(ToSchema)]
pub struct ResultSummaryDoc {
    pub id: i32,
    pub username: String,
    pub profile: String,
    /// `DD.MM.YYYY HH:MM`, UTC
    pub date: String,
    pub energy: i64,
    pub math: i64,
    pub tech: i64,
    pub career: i64,
}

#[derive(ToSchema)]
pub struct ResultsResponseDoc { pub results: Vec<ResultSummaryDoc> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::results::check_username,
        crate::routes::results::submit,
        crate::routes::results::list,
    ),
    components(
        schemas(
            HealthResponse,
            CheckUsernameDoc,
            SubmitRequestDoc,
            SubmitResponseDoc,
            ResultSummaryDoc,
            ResultsResponseDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "results")
    )
)]
pub struct ApiDoc;
