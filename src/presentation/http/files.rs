use std::path::Path;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::dto::diff::{DiffLine, DiffResult, DiffSummary};
use crate::application::use_cases::files::apply_changes::{ApplyChanges, ApplyDirection};
use crate::application::use_cases::files::compare_files::CompareFiles;
use crate::application::use_cases::files::merge_files::MergeFiles;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::error::{ApiError, ErrorBody};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompareFilesRequest {
    pub left_path: String,
    pub right_path: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiffLineResponse {
    pub line_number: u32,
    pub content: String,
    /// One of `same`, `added`, `removed`.
    pub r#type: String,
}

impl From<DiffLine> for DiffLineResponse {
    fn from(line: DiffLine) -> Self {
        Self {
            line_number: line.line_number,
            content: line.content,
            r#type: line.classification.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DiffSummaryResponse {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl From<DiffSummary> for DiffSummaryResponse {
    fn from(s: DiffSummary) -> Self {
        Self {
            added: s.added,
            removed: s.removed,
            unchanged: s.unchanged,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompareFilesResponse {
    pub left_lines: Vec<DiffLineResponse>,
    pub right_lines: Vec<DiffLineResponse>,
    pub summary: DiffSummaryResponse,
}

impl From<DiffResult> for CompareFilesResponse {
    fn from(result: DiffResult) -> Self {
        let summary = result.summary().into();
        Self {
            left_lines: result.left_lines.into_iter().map(Into::into).collect(),
            right_lines: result.right_lines.into_iter().map(Into::into).collect(),
            summary,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApplyDirectionParam {
    LeftToRight,
    RightToLeft,
}

impl From<ApplyDirectionParam> for ApplyDirection {
    fn from(value: ApplyDirectionParam) -> Self {
        match value {
            ApplyDirectionParam::LeftToRight => ApplyDirection::LeftToRight,
            ApplyDirectionParam::RightToLeft => ApplyDirection::RightToLeft,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplyChangesRequest {
    pub left_path: String,
    pub right_path: String,
    pub direction: ApplyDirectionParam,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MergeFilesRequest {
    pub left_path: String,
    pub right_path: String,
    pub output_path: String,
}

fn require_path<'p>(field: &str, value: &'p str) -> Result<&'p Path, ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::bad_request(format!("{field} must not be empty")));
    }
    Ok(Path::new(value))
}

#[utoipa::path(
    post,
    path = "/api/files/compare",
    tag = "Files",
    request_body = CompareFilesRequest,
    responses(
        (status = 200, body = CompareFilesResponse),
        (status = 404, body = ErrorBody),
        (status = 403, body = ErrorBody)
    )
)]
pub async fn compare_files(
    State(ctx): State<AppContext>,
    Json(req): Json<CompareFilesRequest>,
) -> Result<Json<CompareFilesResponse>, ApiError> {
    let left = require_path("leftPath", &req.left_path)?;
    let right = require_path("rightPath", &req.right_path)?;

    let files = ctx.file_store();
    let uc = CompareFiles {
        files: files.as_ref(),
        differ: ctx.span_differ(),
    };
    let result = uc.execute(left, right).await?;

    Ok(Json(CompareFilesResponse::from(result)))
}

#[utoipa::path(
    post,
    path = "/api/files/apply",
    tag = "Files",
    request_body = ApplyChangesRequest,
    responses(
        (status = 204, description = "Target overwritten"),
        (status = 404, body = ErrorBody)
    )
)]
pub async fn apply_changes(
    State(ctx): State<AppContext>,
    Json(req): Json<ApplyChangesRequest>,
) -> Result<StatusCode, ApiError> {
    let left = require_path("leftPath", &req.left_path)?;
    let right = require_path("rightPath", &req.right_path)?;

    let files = ctx.file_store();
    let uc = ApplyChanges {
        files: files.as_ref(),
    };
    uc.execute(left, right, req.direction.into()).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/files/merge",
    tag = "Files",
    request_body = MergeFilesRequest,
    responses(
        (status = 204, description = "Merged output written"),
        (status = 404, body = ErrorBody)
    )
)]
pub async fn merge_files(
    State(ctx): State<AppContext>,
    Json(req): Json<MergeFilesRequest>,
) -> Result<StatusCode, ApiError> {
    let left = require_path("leftPath", &req.left_path)?;
    let right = require_path("rightPath", &req.right_path)?;
    let output = require_path("outputPath", &req.output_path)?;

    let files = ctx.file_store();
    let uc = MergeFiles {
        files: files.as_ref(),
    };
    uc.execute(left, right, output).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/files/compare", post(compare_files))
        .route("/files/apply", post(apply_changes))
        .route("/files/merge", post(merge_files))
        .with_state(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::diff::LineClassification;

    #[test]
    fn response_uses_string_tags_and_camel_case() {
        let result = DiffResult {
            left_lines: vec![DiffLine::new(1, "old", LineClassification::Removed)],
            right_lines: vec![DiffLine::new(1, "new", LineClassification::Added)],
        };
        let json = serde_json::to_value(CompareFilesResponse::from(result)).unwrap();
        assert_eq!(
            json["leftLines"][0],
            serde_json::json!({"lineNumber": 1, "content": "old", "type": "removed"})
        );
        assert_eq!(json["rightLines"][0]["type"], "added");
        assert_eq!(
            json["summary"],
            serde_json::json!({"added": 1, "removed": 1, "unchanged": 0})
        );
    }

    #[test]
    fn blank_paths_are_rejected() {
        let err = require_path("leftPath", "  ").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(require_path("leftPath", "/tmp/a").is_ok());
    }
}
