//! End-to-end tests for `/demos` and the gallery image edge cases that
//! fail before reaching blob storage.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::{build_test_app, delete, expect_json, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

fn demo_payload(order: i32, title: &str) -> serde_json::Value {
    json!({
        "order": order,
        "title": title,
        "description": "A demo",
        "technologies": ["Rust", "Postgres"],
        "links": { "github": "https://github.com/example/demo" },
    })
}

const BOUNDARY: &str = "test-boundary";

fn multipart_body(field_name: &str) -> String {
    format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field_name}\"; filename=\"pic.png\"\r\n\
         Content-Type: image/png\r\n\r\n\
         fake image bytes\r\n\
         --{BOUNDARY}--\r\n"
    )
}

async fn post_multipart(
    app: &axum::Router,
    uri: &str,
    field_name: &str,
) -> axum::http::Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(field_name)))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn demo_crud_round_trip(pool: PgPool) {
    let app = build_test_app(pool);

    // A fresh demo starts with an empty gallery even when the body
    // omits the field.
    let created = expect_json(
        post_json(&app, "/api/v1/demos", demo_payload(0, "chat app")).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(created["gallery"], json!([]));
    assert_eq!(created["links"]["github"], "https://github.com/example/demo");
    let id = created["id"].as_i64().unwrap();

    let replacement = json!({
        "id": id,
        "order": 0,
        "title": "chat app v2",
        "description": "Now with history",
        "technologies": ["Rust"],
        "gallery": [],
        "links": {
            "github": "https://github.com/example/demo",
            "live": "https://demo.example.com",
        },
    });
    let updated = expect_json(
        put_json(&app, &format!("/api/v1/demos/{id}"), replacement).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(updated["title"], "chat app v2");
    assert_eq!(updated["links"]["live"], "https://demo.example.com");

    let deleted = expect_json(
        delete(&app, &format!("/api/v1/demos/{id}")).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(deleted["id"], id);

    let listed = expect_json(get(&app, "/api/v1/demos").await, StatusCode::OK).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn image_upload_without_file_field_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let created = expect_json(
        post_json(&app, "/api/v1/demos", demo_payload(0, "no image")).await,
        StatusCode::OK,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = post_multipart(&app, &format!("/api/v1/demos/{id}/images"), "wrong").await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["error"], "No image provided");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn image_upload_to_missing_demo_returns_404(pool: PgPool) {
    let app = build_test_app(pool);

    // The demo is checked before any blob is written.
    let response = post_multipart(&app, "/api/v1/demos/9999/images", "file").await;
    let body = expect_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn image_delete_on_missing_demo_returns_404(pool: PgPool) {
    let app = build_test_app(pool);

    let body = expect_json(
        delete(&app, "/api/v1/demos/9999/images/abc123").await,
        StatusCode::NOT_FOUND,
    )
    .await;
    assert_eq!(body["code"], "NOT_FOUND");
}
