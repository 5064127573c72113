//! HTML page handlers

use axum::{
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::{ui, AppState};

/// GET /
///
/// Upload form landing page.
pub async fn upload_form() -> impl IntoResponse {
    Html(ui::render_form(None))
}

/// Build UI routes
pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(upload_form))
}
