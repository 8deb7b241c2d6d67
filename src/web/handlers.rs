use crate::domain::model::{SchoolKind, TimetableQuery};
use crate::utils::error::NeisError;
use axum::extract::{Query, Request, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::path::Path;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use super::AppState;

/// Wrapper turning the client error taxonomy into a JSON error response.
pub struct ApiFailure(NeisError);

impl From<NeisError> for ApiFailure {
    fn from(error: NeisError) -> Self {
        ApiFailure(error)
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        tracing::warn!("request failed ({}): {}", status, self.0);
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub school_name: Option<String>,
}

pub async fn search_school(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, ApiFailure> {
    let name = params
        .school_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| NeisError::MissingParameter {
            name: "school_name".to_string(),
        })?;

    let schools = state.directory.search_school(name).await?;
    Ok(Json(json!({ "schools": schools })))
}

#[derive(Debug, Deserialize)]
pub struct TimetableParams {
    pub school_code: Option<String>,
    pub office_code: Option<String>,
    pub school_kind: Option<String>,
    pub grade: Option<String>,
    pub class_nm: Option<String>,
    pub date: Option<String>,
}

pub async fn timetable(
    State(state): State<AppState>,
    Query(params): Query<TimetableParams>,
) -> Result<Json<serde_json::Value>, ApiFailure> {
    let mut missing = Vec::new();
    let school_code = required("school_code", params.school_code, &mut missing);
    let office_code = required("office_code", params.office_code, &mut missing);
    let school_kind = required("school_kind", params.school_kind, &mut missing);
    let grade = required("grade", params.grade, &mut missing);
    let class_name = required("class_nm", params.class_nm, &mut missing);
    let date = required("date", params.date, &mut missing);

    if !missing.is_empty() {
        return Err(NeisError::MissingParameter {
            name: missing.join(", "),
        }
        .into());
    }

    let kind: SchoolKind = school_kind.parse()?;
    let query = TimetableQuery {
        kind,
        office_code,
        school_code,
        grade,
        class_name,
        date,
    };

    let entries = state.directory.timetable(&query).await?;
    Ok(Json(json!({ "timetable": entries })))
}

fn required(
    field: &'static str,
    value: Option<String>,
    missing: &mut Vec<&'static str>,
) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            missing.push(field);
            String::new()
        }
    }
}

/// Serves the static bundle; anything it does not contain falls back to the
/// index document so client-side routing keeps working.
pub async fn serve_frontend(State(state): State<AppState>, req: Request) -> Response {
    match ServeDir::new(&state.static_dir).oneshot(req).await {
        Ok(res) if res.status() != StatusCode::NOT_FOUND => res.into_response(),
        Ok(_) => serve_index(&state.static_dir).await,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

async fn serve_index(static_dir: &Path) -> Response {
    let index = static_dir.join("index.html");
    match tokio::fs::read_to_string(&index).await {
        Ok(contents) => Html(contents).into_response(),
        Err(e) => {
            tracing::warn!("index document unavailable at {}: {}", index.display(), e);
            (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "index.html not found in static folder. Did you build the frontend?"
                })),
            )
                .into_response()
        }
    }
}
