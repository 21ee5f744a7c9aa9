//! Main page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::state::AppState;
use crate::web::context::PushContext;

/// Template for the main page.
///
/// Renders `templates/index.html` with push credentials and a link to the
/// daily orders counter.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub push: PushContext,
    pub clip_overflow: bool,
}

/// Renders the main page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        push: PushContext::from(&state.credentials),
        clip_overflow: false,
    }
}
