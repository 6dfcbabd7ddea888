use axum::{
    Router,
    extract::{OriginalUri, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::template::{NotFoundTemplate, render_with_status};

mod about;
pub mod assets;
mod contact;
mod health;
mod index;

pub use contact::ContactForm;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
}

pub async fn fallback(
    State(app): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> impl IntoResponse {
    tracing::debug!(path = uri.path(), "no route matched");

    render_with_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            current_path: uri.path(),
            site_name: &app.config.site.name,
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/about", get(about::page))
        .route("/contact", get(contact::page).post(contact::action))
        .nest_service("/static", assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
