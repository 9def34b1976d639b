use std::path::Path;

use axum::{Router, response::Redirect, routing::get};
use tower_http::services::ServeDir;

pub const INDEX_PATH: &str = "/static/index.html";

/// `/` redirects to the front page, `/static` serves files from `static_dir`
pub fn create_static_router(static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .nest_service("/static", ServeDir::new(static_dir))
}
