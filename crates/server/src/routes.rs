pub mod computers;
pub mod persons;

use axum::{
    response::{Html, Redirect},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::{
    openapi::{ApiDoc, HealthResponse},
    state::AppState,
};

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

pub async fn index() -> Redirect {
    Redirect::to(computers::LISTING)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

// Swagger UI assets come from the CDN; only the document is served locally.
async fn docs() -> Html<&'static str> {
    Html(r##"<!doctype html>
<html>
<head>
  <title>computer-db API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>SwaggerUIBundle({ url: "/api-docs/openapi.json", dom_id: "#swagger-ui" });</script>
</body>
</html>"##)
}

/// Build the full application router: computers, persons, health and API docs
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let computer_routes = Router::new()
        .route("/computers", get(computers::list).post(computers::create))
        .route("/computers/new", get(computers::new_form))
        .route("/computers/:id", get(computers::edit).post(computers::update))
        .route("/computers/:id/delete", post(computers::delete));

    let person_routes = Router::new()
        .route("/persons", get(persons::list).post(persons::create))
        .route("/persons/new", get(persons::new_form));

    let meta = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/docs", get(docs));

    meta
        .merge(computer_routes)
        .merge(person_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
