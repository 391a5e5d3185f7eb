use axum::Json;
use utoipa::OpenApi;

use crate::presentation::http::{self, error, files};

#[derive(OpenApi)]
#[openapi(
    paths(
        http::health,
        files::compare_files,
        files::apply_changes,
        files::merge_files,
    ),
    components(schemas(
        http::HealthResponse,
        error::ErrorBody,
        files::CompareFilesRequest,
        files::CompareFilesResponse,
        files::DiffLineResponse,
        files::DiffSummaryResponse,
        files::ApplyChangesRequest,
        files::ApplyDirectionParam,
        files::MergeFilesRequest,
    )),
    tags(
        (name = "Files", description = "Compare, apply and merge text files"),
        (name = "System", description = "Service status"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
