use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

const STATIC_EXTENSIONS: &[&str] = &[
    ".css", ".js", ".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp", ".ico", ".woff", ".woff2",
];

pub fn is_static_path(path: &str) -> bool {
    path.starts_with("/static/") || STATIC_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Middleware to set cache control headers
///
/// Static assets that were actually found may be cached for a year,
/// everything else (pages, errors, missing assets) must be refetched.
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let is_static = is_static_path(req.uri().path());
    let mut response = next.run(req).await;
    let cacheable = is_static && response.status().is_success();
    let headers = response.headers_mut();

    if cacheable {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=31536000, immutable"),
        );
    } else {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_paths() {
        assert!(is_static_path("/static/css/site.css"));
        assert!(is_static_path("/favicon.ico"));
    }

    #[test]
    fn test_page_paths() {
        assert!(!is_static_path("/"));
        assert!(!is_static_path("/about"));
        assert!(!is_static_path("/contact"));
    }
}
