use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use migration::{Migrator, MigratorTrait};
use models::db::{connect_with_config, DatabaseConfig};
use serde_json::Value;
use server::{routes, state::AppState};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

async fn build_app() -> Router {
    build_app_with_page_size(10).await
}

async fn build_app_with_page_size(page_size: u64) -> Router {
    let url = std::env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
    let mut cfg = DatabaseConfig { url, ..Default::default() };
    cfg.max_connections = 1;
    cfg.min_connections = 1;
    let db = connect_with_config(&cfg).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    routes::build_router(AppState::new(db, page_size), CorsLayer::very_permissive())
}

fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
}

async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut req = Request::builder().uri(uri);
    if let Some(c) = cookie {
        req = req.header(header::COOKIE, c);
    }
    app.clone().oneshot(req.body(Body::empty()).unwrap()).await.unwrap()
}

async fn post_form(app: &Router, uri: &str, form: &[(&str, &str)]) -> Response {
    let body = form
        .iter()
        .map(|(k, v)| format!("{}={}", k, v.replace(' ', "+")))
        .collect::<Vec<_>>()
        .join("&");
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

async fn json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn location(resp: &Response) -> &str {
    resp.headers().get(header::LOCATION).unwrap().to_str().unwrap()
}

/// `flash=...` pair from the Set-Cookie header, ready to send back.
fn flash_cookie(resp: &Response) -> String {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("flash="))
        .and_then(|v| v.split(';').next())
        .unwrap()
        .to_string()
}

async fn first_company_id(app: &Router) -> i64 {
    let view = json(get(app, "/computers/new", None).await).await;
    view["companies"][0]["id"].as_i64().unwrap()
}

async fn find_listed(app: &Router, name: &str) -> Option<Value> {
    let view = json(get(app, &format!("/computers?filter={}", name), None).await).await;
    view["items"].as_array().unwrap().iter().find(|c| c["name"] == name).cloned()
}

#[tokio::test]
async fn root_redirects_to_listing() {
    let app = build_app().await;
    let resp = get(&app, "/", None).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/computers");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = build_app().await;
    let resp = get(&app, "/health", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json(resp).await["status"], "ok");
}

#[tokio::test]
async fn create_redirects_with_flash_and_lists_row() {
    let app = build_app().await;
    let company_id = first_company_id(&app).await;
    let name = unique("ACE");

    let resp = post_form(&app, "/computers", &[
        ("name", &name),
        ("introduced", "1981-08-12"),
        ("discontinued", ""),
        ("company.id", &company_id.to_string()),
    ])
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/computers");
    let cookie = flash_cookie(&resp);

    let resp = get(&app, &format!("/computers?filter={}", name), Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let view = json(resp).await;
    assert_eq!(view["flash"], format!("Computer {} has been created", name));
    assert_eq!(view["total"], 1);
    let row = &view["items"][0];
    assert_eq!(row["name"], name.as_str());
    assert_eq!(row["introduced"], "1981-08-12");
    assert!(row["discontinued"].is_null());
    assert_eq!(row["company"]["id"], company_id);
}

#[tokio::test]
async fn invalid_form_rerenders_with_errors() {
    let app = build_app().await;
    let resp = post_form(&app, "/computers", &[("name", ""), ("introduced", "12/08/1981")]).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let view = json(resp).await;
    assert!(view["errors"]["name"].is_array());
    assert!(view["errors"]["introduced"].is_array());
    assert_eq!(view["form"]["introduced"], "12/08/1981");
    assert!(!view["companies"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_company_is_a_field_error() {
    let app = build_app().await;
    let name = unique("Ghost");
    let resp = post_form(&app, "/computers", &[("name", &name), ("company.id", "999999")]).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let view = json(resp).await;
    assert!(view["errors"]["company.id"].is_array());
    assert!(find_listed(&app, &name).await.is_none());
}

#[tokio::test]
async fn missing_computer_is_not_found() {
    let app = build_app().await;
    let id = i64::MAX;
    assert_eq!(get(&app, &format!("/computers/{id}"), None).await.status(), StatusCode::NOT_FOUND);
    let resp = post_form(&app, &format!("/computers/{id}"), &[("name", "Nothing")]).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json(resp).await["error"], "Not Found");
    let resp = post_form(&app, &format!("/computers/{id}/delete"), &[]).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_uses_path_id_over_body_id() {
    let app = build_app().await;
    let a = unique("Alpha");
    let b = unique("Beta");
    post_form(&app, "/computers", &[("name", &a)]).await;
    post_form(&app, "/computers", &[("name", &b)]).await;
    let a_id = find_listed(&app, &a).await.unwrap()["id"].as_i64().unwrap();
    let b_id = find_listed(&app, &b).await.unwrap()["id"].as_i64().unwrap();

    let renamed = unique("Alpha2");
    let resp = post_form(&app, &format!("/computers/{a_id}"), &[
        ("id", &b_id.to_string()),
        ("name", &renamed),
        ("discontinued", "1990-01-01"),
    ])
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let edit = json(get(&app, &format!("/computers/{a_id}"), None).await).await;
    assert_eq!(edit["id"], a_id);
    assert_eq!(edit["form"]["name"], renamed.as_str());
    assert_eq!(edit["form"]["discontinued"], "1990-01-01");
    let untouched = json(get(&app, &format!("/computers/{b_id}"), None).await).await;
    assert_eq!(untouched["form"]["name"], b.as_str());
}

#[tokio::test]
async fn delete_removes_row_and_flashes() {
    let app = build_app().await;
    let name = unique("Doomed");
    post_form(&app, "/computers", &[("name", &name)]).await;
    let id = find_listed(&app, &name).await.unwrap()["id"].as_i64().unwrap();

    let resp = post_form(&app, &format!("/computers/{id}/delete"), &[]).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let cookie = flash_cookie(&resp);
    let view = json(get(&app, "/computers", Some(&cookie)).await).await;
    assert_eq!(view["flash"], "Computer has been deleted");
    assert!(find_listed(&app, &name).await.is_none());
    assert_eq!(get(&app, &format!("/computers/{id}"), None).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_pages_and_rejects_unknown_sort() {
    let app = build_app().await;
    let prefix = unique("Page");
    for i in 0..12 {
        post_form(&app, "/computers", &[("name", &format!("{prefix}-{i:02}"))]).await;
    }
    let view = json(get(&app, &format!("/computers?filter={prefix}&page=2&order=desc"), None).await).await;
    assert_eq!(view["total"], 12);
    assert_eq!(view["items"].as_array().unwrap().len(), 2);
    assert_eq!(view["has_prev"], true);
    assert_eq!(view["has_next"], false);
    assert_eq!(view["display"], "11 to 12 of 12");
    assert_eq!(view["items"][0]["name"], format!("{prefix}-01"));

    let resp = get(&app, "/computers?sortBy=password", None).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let resp = get(&app, "/computers?order=sideways", None).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn huge_page_numbers_list_an_empty_page() {
    let app = build_app().await;
    let name = unique("Lonely");
    post_form(&app, "/computers", &[("name", &name)]).await;
    for page in ["9223372036854775807", "1000000000000000000"] {
        let resp = get(&app, &format!("/computers?filter={name}&page={page}"), None).await;
        assert_eq!(resp.status(), StatusCode::OK, "page={page}");
        let view = json(resp).await;
        assert!(view["items"].as_array().unwrap().is_empty());
        assert_eq!(view["total"], 1);
        assert_eq!(view["has_next"], false);
    }
}

#[tokio::test]
async fn blank_page_is_first_page_and_garbage_is_json_400() {
    let app = build_app().await;
    let resp = get(&app, "/computers?page=&sortBy=name", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json(resp).await["page"], 1);

    let resp = get(&app, "/computers?page=abc", None).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json(resp).await;
    assert_eq!(body["error"], "Invalid Query");
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn configured_page_size_is_clamped() {
    let prefix = unique("Clamp");
    let big = build_app_with_page_size(1_000).await;
    for i in 0..3 {
        post_form(&big, "/computers", &[("name", &format!("{prefix}-{i}"))]).await;
    }
    let view = json(get(&big, &format!("/computers?filter={prefix}"), None).await).await;
    assert_eq!(view["page_size"], 100);
    assert_eq!(view["items"].as_array().unwrap().len(), 3);

    let tiny = build_app_with_page_size(0).await;
    post_form(&tiny, "/computers", &[("name", &format!("{prefix}-a"))]).await;
    post_form(&tiny, "/computers", &[("name", &format!("{prefix}-b"))]).await;
    let view = json(get(&tiny, &format!("/computers?filter={prefix}"), None).await).await;
    assert_eq!(view["page_size"], 1);
    assert_eq!(view["items"].as_array().unwrap().len(), 1);
    assert_eq!(view["has_next"], true);
}

#[tokio::test]
async fn person_form_create_and_list() {
    let app = build_app().await;
    let view = json(get(&app, "/persons/new", None).await).await;
    assert_eq!(view["form"]["name"], "");

    let resp = post_form(&app, "/persons", &[("name", ""), ("dueDate", "2016-08-14")]).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let name = unique("Kim");
    let resp = post_form(&app, "/persons", &[
        ("name", &name),
        ("nick", "kimmy"),
        ("done", "on"),
        ("dueDate", "2016/08/14"),
    ])
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/persons");
    let cookie = flash_cookie(&resp);

    let view = json(get(&app, "/persons", Some(&cookie)).await).await;
    assert_eq!(view["flash"], format!("Person {} has been created", name));
    let person = view["persons"].as_array().unwrap().iter().find(|p| p["name"] == name.as_str()).unwrap();
    assert_eq!(person["done"], true);
    assert_eq!(person["nick"], "kimmy");
    assert_eq!(person["due_date"], "2016-08-14");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = build_app().await;
    let resp = get(&app, "/api-docs/openapi.json", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = json(resp).await;
    assert!(doc["paths"]["/computers"].is_object());

    let resp = get(&app, "/docs", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(html.to_vec()).unwrap();
    assert!(html.contains(r##"dom_id: "#swagger-ui""##));
    assert!(html.contains("/api-docs/openapi.json"));
}
