//! End-to-end tests driving the page API through the full router.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use db::DBService;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use server::{AppState, app_router};
use tower::ServiceExt;

async fn test_app() -> Router {
    let db = DBService::new_in_memory().await.expect("in-memory database");
    app_router(AppState::new(db))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, value)
}

fn listed_slugs(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .expect("page list")
        .iter()
        .map(|page| page["slug"].as_str().expect("slug").to_string())
        .collect()
}

#[tokio::test]
async fn draft_pages_stay_out_of_the_published_list_until_published() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/pages",
        Some(json!({ "slug": "intro", "title": "Intro Page", "content": "hello" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], "draft");
    assert_eq!(body["data"]["content"], "hello");

    let (status, body) = send(&app, "GET", "/api/pages?status=published", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(listed_slugs(&body).is_empty());

    let (status, _) = send(
        &app,
        "PUT",
        "/api/pages/intro",
        Some(json!({ "status": "published" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/api/pages?status=published", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed_slugs(&body), vec!["intro"]);
}

#[tokio::test]
async fn structured_pages_store_the_merged_template_payload() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/pages",
        Some(json!({
            "slug": "benefits",
            "title": "Benefits Page",
            "template": "benefits_for_patients",
            "templateData": { "hero": { "title": "Custom Title" } },
            "selectedComponents": ["hero", "doctor"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let template_data = &body["data"]["templateData"];
    assert_eq!(template_data["hero"]["title"], "Custom Title");
    assert_eq!(template_data["hero"]["eyebrow"], "FAYDALAR");
    assert_eq!(template_data["doctor"]["name"], "Karl Ulrich Volz");
    assert_eq!(
        body["data"]["selectedComponents"],
        json!(["hero", "doctor"])
    );

    let (status, body) = send(&app, "GET", "/api/pages/benefits", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["templateData"]["hero"]["title"], "Custom Title");
}

#[tokio::test]
async fn invalid_payloads_report_per_field_issues() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/pages",
        Some(json!({ "slug": "x", "title": "ab" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    let fields: Vec<&str> = body["error_data"]["issues"]
        .as_array()
        .expect("issues")
        .iter()
        .map(|issue| issue["field"].as_str().expect("field"))
        .collect();
    assert!(fields.contains(&"slug"));
    assert!(fields.contains(&"title"));
}

#[tokio::test]
async fn duplicate_slugs_are_rejected_regardless_of_case_and_whitespace() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/pages",
        Some(json!({ "slug": "demo-page", "title": "Demo Page" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        "POST",
        "/api/pages",
        Some(json!({ "slug": " Demo-Page ", "title": "Other Title" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Slug already exists. Choose a unique slug.");
}

#[tokio::test]
async fn missing_pages_yield_404_on_every_slug_route() {
    let app = test_app().await;

    let (status, _) = send(&app, "GET", "/api/pages/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        "PUT",
        "/api/pages/nope",
        Some(json!({ "title": "New Title" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Page not found");

    let (status, _) = send(&app, "DELETE", "/api/pages/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn updates_only_touch_the_provided_fields() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/pages",
        Some(json!({ "slug": "partial", "title": "A title", "excerpt": "B" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        "PUT",
        "/api/pages/partial",
        Some(json!({ "title": "C title" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "C title");
    assert_eq!(body["data"]["excerpt"], "B");
}

#[tokio::test]
async fn delete_acknowledges_and_removes_the_page() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/pages",
        Some(json!({ "slug": "ephemeral", "title": "Ephemeral Page" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "DELETE", "/api/pages/ephemeral", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = send(&app, "GET", "/api/pages/ephemeral", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], "ok");
}
