#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use homepage::config::{Config, ObservabilityConfig, ServerConfig, SiteConfig};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
        },
        site: SiteConfig {
            name: "Test Site".to_string(),
        },
        observability: ObservabilityConfig::default(),
    }
}

/// Full application, middleware stack included
pub fn create_test_app() -> Router {
    homepage::app(test_config())
}

pub async fn get(uri: &str) -> Response<Body> {
    create_test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(uri: &str, body: String) -> Response<Body> {
    create_test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}
