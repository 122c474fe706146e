pub mod health;
pub mod pages;

use axum::{
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index_page))
        .route("/majors", get(pages::majors_page))
        .route("/test", get(pages::test_page).post(pages::test_submit))
        .route("/test_ans", get(pages::test_result_page))
        .route("/health", get(health::health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(pages::fallback_redirect)
        .with_state(state)
}
