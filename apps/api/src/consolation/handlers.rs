//! Axum route handlers for the Consolation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::consolation::models::{ConsolationRequest, ConsolationResponse};
use crate::consolation::normalizer::{request_consolation, request_more_verses};
use crate::consolation::session::Session;
use crate::errors::{AppError, INPUT_REQUIRED_MESSAGE};
use crate::state::AppState;
use crate::validation::validate;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolationBody {
    #[serde(default)]
    pub user_input: Option<String>,
}

fn read_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::Validation(format!("Cuerpo de la solicitud inválido: {e}")))
}

fn no_previous_query() -> AppError {
    AppError::Validation("No hay una consulta previa para ampliar.".to_string())
}

/// Trims the input and runs it through the validator.
fn accept_input(raw: Option<&str>) -> Result<ConsolationRequest, AppError> {
    let request = raw
        .and_then(ConsolationRequest::new)
        .ok_or_else(|| AppError::Validation(INPUT_REQUIRED_MESSAGE.to_string()))?;

    if let Some(reason) = validate(&request.user_text).reason {
        info!(?reason, "Rejected consolation input");
        return Err(AppError::Rejected(reason));
    }
    Ok(request)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/consolation
///
/// Validates the user's text and returns a reflection plus a verse batch.
pub async fn handle_consolation(
    State(state): State<AppState>,
    payload: Result<Json<ConsolationBody>, JsonRejection>,
) -> Result<Json<ConsolationResponse>, AppError> {
    let body = read_body(payload)?;
    let request = accept_input(body.user_input.as_deref())?;

    let service = state.completion()?;
    let response = request_consolation(service, &request.user_text).await?;

    info!(verses = response.verses.len(), "Consolation generated");
    Ok(Json(response))
}

/// POST /api/consolation/more
///
/// Body is the caller's session snapshot. Returns the current response with
/// new, previously unseen verses appended.
pub async fn handle_more_verses(
    State(state): State<AppState>,
    payload: Result<Json<Session>, JsonRejection>,
) -> Result<Json<ConsolationResponse>, AppError> {
    let mut session = read_body(payload)?;
    let request = accept_input(session.user_input())?;

    let existing = session
        .current()
        .filter(|c| c.check_shape().is_ok())
        .map(|c| c.verses.clone())
        .ok_or_else(no_previous_query)?;

    let service = state.completion()?;
    let fresh = request_more_verses(service, &request.user_text, &existing).await?;

    let added = session.extend_verses(fresh);
    info!(added, "More verses appended");

    let response = session.into_current().ok_or_else(no_previous_query)?;
    Ok(Json(response))
}

/// POST /api/consolation/document
///
/// Renders the caller's current response as a downloadable text document.
pub async fn handle_document(
    payload: Result<Json<Session>, JsonRejection>,
) -> Result<Response, AppError> {
    let session = read_body(payload)?;
    let today = chrono::Local::now().date_naive();
    let document = session.export(today)?;

    let headers = [
        (
            header::CONTENT_TYPE,
            "text/plain; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", document.filename),
        ),
    ];
    Ok((headers, document.content).into_response())
}

/// Any non-POST method on a consolation route.
pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
