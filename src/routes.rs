// src/routes.rs

use axum::{
    Router,
    http::{Method, StatusCode, header},
    response::Response,
    routing::{delete, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error,
    handlers::{category, question, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Wires the category, question and quiz endpoints.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool + Config).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route(
            "/categories",
            get(category::list_categories).post(category::create_category),
        )
        .route(
            "/categories/{id}/questions",
            get(category::list_category_questions),
        )
        .route(
            "/questions",
            get(question::list_questions).post(question::create_question),
        )
        .route("/questions/{id}", delete(question::delete_question))
        .route("/questions/search", post(question::search_questions))
        .route("/quizzes", post(quiz::play_quiz))
        // Router-level failures share the JSON error envelope
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> Response {
    error::error_response(StatusCode::NOT_FOUND)
}

async fn method_not_allowed() -> Response {
    error::error_response(StatusCode::METHOD_NOT_ALLOWED)
}
