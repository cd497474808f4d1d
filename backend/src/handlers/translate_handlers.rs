use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::api::gemini::TextPair;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub headline: String,
    pub subheadline: String,
    pub target_language: String,
}

/// Always answers 200 with a complete pair: a failed or disabled
/// translation returns the request's own text, never an error.
pub async fn translate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TranslateRequest>,
) -> Json<TextPair> {
    info!("translating headline pair to {}", request.target_language);
    let pair = state
        .translator
        .translate(
            &request.headline,
            &request.subheadline,
            &request.target_language,
        )
        .await;
    Json(pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::gemini::Translator;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use tower::ServiceExt;

    fn test_app(translator: Translator) -> Router {
        let state = Arc::new(AppState { translator });
        Router::new()
            .route("/api/translate", post(translate))
            .with_state(state)
    }

    async fn response_pair(app: Router, body: &str) -> (StatusCode, TextPair) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/translate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn disabled_translator_echoes_the_pair() {
        let app = test_app(Translator::for_tests(None, "http://127.0.0.1:1"));
        let (status, pair) = response_pair(
            app,
            r#"{"headline":"Hello","subheadline":"World","target_language":"Spanish"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(pair.headline, "Hello");
        assert_eq!(pair.subheadline, "World");
    }

    #[tokio::test]
    async fn upstream_failure_still_answers_200_with_the_pair() {
        let app = test_app(Translator::for_tests(Some("key"), "http://127.0.0.1:1"));
        let (status, pair) = response_pair(
            app,
            r#"{"headline":"Hello","subheadline":"World","target_language":"German"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(pair.headline, "Hello");
        assert_eq!(pair.subheadline, "World");
    }
}
