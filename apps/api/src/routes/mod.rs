pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::consolation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/consolation",
            post(handlers::handle_consolation).fallback(handlers::handle_method_not_allowed),
        )
        .route(
            "/api/consolation/more",
            post(handlers::handle_more_verses).fallback(handlers::handle_method_not_allowed),
        )
        .route(
            "/api/consolation/document",
            post(handlers::handle_document).fallback(handlers::handle_method_not_allowed),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::stub::{consolation_json, verses_json, StubCompletion};
    use crate::llm_client::CompletionService;

    fn config() -> Config {
        Config {
            gemini_api_key: None,
            gemini_model: "gemini-test".to_string(),
            gemini_api_base: "http://localhost".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    fn app_with(stub: Option<Arc<StubCompletion>>) -> Router {
        let completion = stub.map(|s| s as Arc<dyn CompletionService>);
        build_router(AppState {
            config: config(),
            completion,
        })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_consolation_success() {
        let stub = Arc::new(StubCompletion::text(consolation_json(5)));
        let (status, body) = send(
            app_with(Some(stub.clone())),
            post_json(
                "/api/consolation",
                json!({ "userInput": "Me siento muy triste y solo últimamente" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["verses"].as_array().unwrap().len(), 5);
        assert_eq!(body["briefSummary"], "tristeza y soledad");
        assert_eq!(stub.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_input_is_bad_request() {
        let stub = Arc::new(StubCompletion::text(consolation_json(5)));
        for body in [json!({ "userInput": "   " }), json!({})] {
            let (status, response) = send(
                app_with(Some(stub.clone())),
                post_json("/api/consolation", body),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(response["error"], "Texto de entrada requerido");
        }
        assert!(stub.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/consolation")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(app_with(None), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_rejected_input_never_reaches_service() {
        let stub = Arc::new(StubCompletion::text(consolation_json(5)));
        let (status, body) = send(
            app_with(Some(stub.clone())),
            post_json(
                "/api/consolation",
                json!({ "userInput": "visita www.ejemplo.com para más info" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INPUT_REJECTED");
        assert!(stub.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_get_is_method_not_allowed() {
        let request = Request::builder()
            .method("GET")
            .uri("/api/consolation")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app_with(None), request).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], "Método no permitido");
    }

    #[tokio::test]
    async fn test_missing_credential_is_config_error() {
        let (status, body) = send(
            app_with(None),
            post_json(
                "/api/consolation",
                json!({ "userInput": "Me siento muy triste y solo últimamente" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "CONFIG_ERROR");
        assert!(!body["error"].as_str().unwrap().contains("GEMINI_API_KEY"));
    }

    #[tokio::test]
    async fn test_safety_block_is_server_error() {
        let stub = Arc::new(StubCompletion::safety());
        let (status, body) = send(
            app_with(Some(stub)),
            post_json(
                "/api/consolation",
                json!({ "userInput": "Me siento muy triste y solo últimamente" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "SAFETY_BLOCKED");
    }

    #[tokio::test]
    async fn test_empty_verses_is_format_error() {
        let stub = Arc::new(StubCompletion::text(
            json!({ "initialReflection": "r", "verses": [] }).to_string(),
        ));
        let (status, body) = send(
            app_with(Some(stub)),
            post_json(
                "/api/consolation",
                json!({ "userInput": "Me siento muy triste y solo últimamente" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "FORMAT_ERROR");
    }

    #[tokio::test]
    async fn test_more_verses_appends_new_batch() {
        let stub = Arc::new(StubCompletion::text(
            json!({ "verses": verses_json("Isaías", 40..45) }).to_string(),
        ));
        let current: Value = serde_json::from_str(&consolation_json(5)).unwrap();
        let (status, body) = send(
            app_with(Some(stub.clone())),
            post_json(
                "/api/consolation/more",
                json!({ "userInput": "Tengo mucho miedo del futuro", "current": current }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let verses = body["verses"].as_array().unwrap();
        assert_eq!(verses.len(), 10);
        assert_eq!(verses[5]["reference"], "Isaías 40:1");
        assert!(stub.prompts()[0].contains("Salmo 1:1"));
    }

    #[tokio::test]
    async fn test_more_verses_without_current_is_bad_request() {
        let stub = Arc::new(StubCompletion::text(consolation_json(5)));
        let (status, _) = send(
            app_with(Some(stub.clone())),
            post_json(
                "/api/consolation/more",
                json!({ "userInput": "Tengo mucho miedo del futuro" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(stub.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_document_download() {
        let current: Value = serde_json::from_str(&consolation_json(5)).unwrap();
        let response = app_with(None)
            .oneshot(post_json(
                "/api/consolation/document",
                json!({ "userInput": "texto", "current": current }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"Versiculos-Para-Ti-"));
        assert!(disposition.ends_with(".txt\""));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        for n in 1..=5 {
            assert!(text.contains(&format!("Salmo {n}:1")));
        }
    }

    #[tokio::test]
    async fn test_document_without_verses_is_bad_request() {
        let (status, body) = send(
            app_with(None),
            post_json("/api/consolation/document", json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("No hay versículos"));
    }

    #[tokio::test]
    async fn test_health_reports_configuration() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app_with(None), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["completion_configured"], false);
    }
}
