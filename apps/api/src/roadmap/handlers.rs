//! Axum route handlers for the Roadmap API and the form page.

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    http::StatusCode,
    response::Html,
    Form, Json,
};
use tracing::warn;

use crate::errors::AppError;
use crate::roadmap::builder::RoadmapRequest;
use crate::roadmap::generator::{generate_roadmap, GeneratedRoadmap};
use crate::roadmap::page::{render_page, PageContent};
use crate::state::AppState;

/// POST /api/v1/roadmap
///
/// Generates a roadmap and returns both the raw Markdown and the rendered HTML.
/// Malformed bodies get the same JSON error envelope as every other failure.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Result<Json<RoadmapRequest>, JsonRejection>,
) -> Result<Json<GeneratedRoadmap>, AppError> {
    let Json(request) = body.map_err(|rejection| {
        warn!("Rejected roadmap JSON body: {}", rejection.body_text());
        AppError::Validation(
            "Request body must be JSON with a semester (1-8), a branch and optional skills"
                .to_string(),
        )
    })?;
    let roadmap = generate_roadmap(state.llm.as_ref(), &request).await?;
    Ok(Json(roadmap))
}

/// GET /
pub async fn handle_form_page() -> Html<String> {
    Html(render_page(PageContent::Blank))
}

/// POST /roadmap
///
/// Form submission. Always answers with the full page: either the rendered
/// roadmap or an error panel, never both.
pub async fn handle_form_submit(
    State(state): State<AppState>,
    form: Result<Form<RoadmapRequest>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let result = match form {
        Ok(Form(request)) => generate_roadmap(state.llm.as_ref(), &request).await,
        Err(rejection) => {
            warn!("Rejected roadmap form body: {}", rejection.body_text());
            Err(AppError::Validation(
                "Please choose a semester and a branch, then submit again.".to_string(),
            ))
        }
    };

    match result {
        Ok(roadmap) => (
            StatusCode::OK,
            Html(render_page(PageContent::Roadmap(&roadmap.html))),
        ),
        Err(e) => {
            let (status, _, message) = e.describe();
            (status, Html(render_page(PageContent::Error(&message))))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::llm_client::LlmError;
    use crate::roadmap::generator::tests::FakeGenerator;
    use crate::routes::build_router;

    fn app(outcome: fn() -> Result<String, LlmError>) -> Router {
        build_router(AppState {
            llm: Arc::new(FakeGenerator::new(outcome)),
        })
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn json_request(body: &str) -> Request<Body> {
        Request::post("/api/v1/roadmap")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn form_request(body: &str) -> Request<Body> {
        Request::post("/roadmap")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_json_generate_returns_markdown_and_html() {
        let response = app(|| Ok("### Semester 4\n* Learn **SQL**".to_string()))
            .oneshot(json_request(
                r#"{"semester": 4, "branch": "Information Technology", "skills": "Java"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["markdown"], "### Semester 4\n* Learn **SQL**");
        assert_eq!(
            body["html"],
            "<h3>Semester 4</h3><ul><li>Learn <strong>SQL</strong></li></ul>"
        );
        assert_eq!(body["model"], "fake-model");
        assert!(body["generated_at"].is_string());
    }

    #[tokio::test]
    async fn test_json_generate_rejects_invalid_semester() {
        let response = app(|| Ok("unused".to_string()))
            .oneshot(json_request(r#"{"semester": 12, "branch": "IT"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    async fn assert_validation_envelope(response: axum::response::Response) {
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        let message = body["error"]["message"].as_str().unwrap();
        assert!(!message.contains("deserialize"));
    }

    #[tokio::test]
    async fn test_json_semester_overflowing_u8_gets_error_envelope() {
        let response = app(|| Ok("unused".to_string()))
            .oneshot(json_request(r#"{"semester": 300, "branch": "IT"}"#))
            .await
            .unwrap();

        assert_validation_envelope(response).await;
    }

    #[tokio::test]
    async fn test_json_missing_branch_gets_error_envelope() {
        let response = app(|| Ok("unused".to_string()))
            .oneshot(json_request(r#"{"semester": 3}"#))
            .await
            .unwrap();

        assert_validation_envelope(response).await;
    }

    #[tokio::test]
    async fn test_json_non_json_body_gets_error_envelope() {
        let response = app(|| Ok("unused".to_string()))
            .oneshot(json_request("not json"))
            .await
            .unwrap();

        assert_validation_envelope(response).await;
    }

    #[tokio::test]
    async fn test_json_generate_upstream_status_is_reported() {
        let response = app(|| {
            Err(LlmError::Api {
                status: 429,
                message: "quota".to_string(),
            })
        })
        .oneshot(json_request(r#"{"semester": 2, "branch": "IT"}"#))
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("429"));
    }

    #[tokio::test]
    async fn test_json_generate_safety_blocked() {
        let response = app(|| Err(LlmError::SafetyBlocked))
            .oneshot(json_request(r#"{"semester": 2, "branch": "IT"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "SAFETY_BLOCKED");
    }

    #[tokio::test]
    async fn test_form_page_is_served() {
        let response = app(|| Ok("unused".to_string()))
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_string(response).await;
        assert!(page.contains("<form method=\"post\" action=\"/roadmap\""));
    }

    #[tokio::test]
    async fn test_form_submit_renders_roadmap() {
        let response = app(|| Ok("### Semester 6\n* Build a **compiler**".to_string()))
            .oneshot(form_request(
                "semester=6&branch=Computer+Science+and+Engineering&skills=C%2C+Rust",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_string(response).await;
        assert!(page
            .contains("<h3>Semester 6</h3><ul><li>Build a <strong>compiler</strong></li></ul>"));
        assert!(!page.contains("role=\"alert\""));
    }

    #[tokio::test]
    async fn test_form_submit_shows_error_panel_without_roadmap() {
        let response = app(|| Err(LlmError::MalformedResponse("empty".to_string())))
            .oneshot(form_request("semester=6&branch=Civil+Engineering&skills="))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let page = body_string(response).await;
        assert!(page.contains("role=\"alert\""));
        assert!(page.contains("invalid response"));
        assert!(!page.contains("class=\"roadmap\""));
    }

    #[tokio::test]
    async fn test_form_submit_with_bad_fields_shows_error_panel() {
        let response = app(|| Ok("unused".to_string()))
            .oneshot(form_request("semester=abc&branch=Civil+Engineering"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let page = body_string(response).await;
        assert!(page.contains("role=\"alert\""));
        assert!(page.contains("Please choose a semester and a branch"));
        assert!(!page.contains("invalid digit"));
        assert!(!page.contains("deserialize"));
    }
}
