use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Render an askama template into a `200 OK` HTML response
pub fn render<T: askama::Template>(template: T) -> Response {
    render_with_status(StatusCode::OK, template)
}

/// Render an askama template into an HTML response with the given status
///
/// Render failures are logged and answered with a plain 500.
pub fn render_with_status<T: askama::Template>(status: StatusCode, template: T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(err = %err, status = %status, "failed to render template");

            (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
        }
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate<'a> {
    pub current_path: &'a str,
    pub site_name: &'a str,
}
