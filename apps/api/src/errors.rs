use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::consolation::session::NothingToExport;
use crate::llm_client::LlmError;
use crate::validation::Rejection;

pub const INPUT_REQUIRED_MESSAGE: &str = "Texto de entrada requerido";
const GENERIC_RETRY_MESSAGE: &str =
    "No se pudo procesar tu solicitud con la IA. Por favor, inténtalo de nuevo.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Input rejected: {0:?}")]
    Rejected(Rejection),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl From<NothingToExport> for AppError {
    fn from(e: NothingToExport) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Rejected(reason) => (
                StatusCode::BAD_REQUEST,
                "INPUT_REJECTED",
                reason.message().to_string(),
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                "Método no permitido".to_string(),
            ),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                llm_error_response(e)
            }
        };

        let body = Json(json!({
            "error": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}

/// Every downstream failure is a 500; only the wording differs.
fn llm_error_response(e: &LlmError) -> (StatusCode, &'static str, String) {
    let (code, message) = match e {
        LlmError::Service { status, body } => (
            "SERVICE_ERROR",
            format!("Error en la API de IA: {status}. Detalles: {body}"),
        ),
        LlmError::Format(_) => (
            "FORMAT_ERROR",
            "La IA no devolvió la estructura esperada. Por favor, inténtalo de nuevo.".to_string(),
        ),
        LlmError::SafetyBlocked => (
            "SAFETY_BLOCKED",
            "La respuesta fue bloqueada por motivos de seguridad. Intenta reformular tu consulta."
                .to_string(),
        ),
        LlmError::MissingCredential => (
            "CONFIG_ERROR",
            "El servicio no está disponible en este momento. Por favor, inténtalo más tarde."
                .to_string(),
        ),
        LlmError::Transport(_) => ("TRANSPORT_ERROR", GENERIC_RETRY_MESSAGE.to_string()),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, code, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_rejection_is_bad_request_with_message() {
        let (status, body) = body_json(AppError::Rejected(Rejection::ContainsCode)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], Rejection::ContainsCode.message());
        assert_eq!(body["code"], "INPUT_REJECTED");
    }

    #[tokio::test]
    async fn test_service_error_surfaces_status_and_body() {
        let (status, body) = body_json(AppError::Llm(LlmError::Service {
            status: 429,
            body: "quota".to_string(),
        }))
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("429"));
        assert!(message.contains("quota"));
    }

    #[tokio::test]
    async fn test_missing_credential_does_not_name_variable() {
        let (status, body) = body_json(AppError::Llm(LlmError::MissingCredential)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "CONFIG_ERROR");
        let message = body["error"].as_str().unwrap();
        assert!(!message.contains("GEMINI"));
        assert!(!message.to_lowercase().contains("key"));
    }

    #[tokio::test]
    async fn test_safety_block_suggests_rephrasing() {
        let (_, body) = body_json(AppError::Llm(LlmError::SafetyBlocked)).await;
        assert_eq!(body["code"], "SAFETY_BLOCKED");
        assert!(body["error"].as_str().unwrap().contains("reformular"));
    }

    #[tokio::test]
    async fn test_method_not_allowed() {
        let (status, body) = body_json(AppError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], "Método no permitido");
    }
}
