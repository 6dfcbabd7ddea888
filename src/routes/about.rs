use axum::{extract::State, response::IntoResponse};

use crate::routes::AppState;
use crate::template::render;

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate<'a> {
    pub current_path: &'a str,
    pub site_name: &'a str,
}

pub async fn page(State(app): State<AppState>) -> impl IntoResponse {
    render(AboutTemplate {
        current_path: "/about",
        site_name: &app.config.site.name,
    })
}
