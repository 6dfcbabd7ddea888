use axum::{
    body::{Body, to_bytes},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::LazyLock;

static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
    keep_closing_tags: true,
    keep_html_and_head_opening_tags: true,
    minify_css: true,
    ..Default::default()
});

cfg_if::cfg_if! {
    if #[cfg(debug_assertions)] {
        /// Middleware to minify HTML responses, a pass-through in debug builds
        pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
            response
        }
    } else {
        /// Middleware to minify HTML responses
        pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
            minify_html_response(response).await
        }
    }
}

/// Minify a `text/html` response, leaving any other response untouched.
///
/// A body that cannot be buffered turns into a 500.
pub async fn minify_html_response(response: Response<Body>) -> Response<Body> {
    let is_html = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|v| v.contains("text/html"));

    if !is_html {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(err = %err, "failed to buffer html response");

            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                crate::template::SERVER_ERROR_MESSAGE,
            )
                .into_response();
        }
    };

    let minified = minify_html::minify(&bytes, &MINIFY_CFG);
    parts.headers.remove(header::CONTENT_LENGTH);

    Response::from_parts(parts, Body::from(minified))
}
