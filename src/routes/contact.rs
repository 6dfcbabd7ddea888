use axum::{
    extract::{Form, FromRequest, Multipart, Request, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use std::convert::Infallible;

use crate::routes::AppState;
use crate::template::render;

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate<'a> {
    pub current_path: &'a str,
    pub site_name: &'a str,
}

pub async fn page(State(app): State<AppState>) -> impl IntoResponse {
    render(ContactTemplate {
        current_path: "/contact",
        site_name: &app.config.site.name,
    })
}

/// A contact form submission. Every field is optional and unchecked.
///
/// Read from `application/x-www-form-urlencoded` or `multipart/form-data`
/// bodies. Anything unreadable becomes an empty submission.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl<S: Send + Sync> FromRequest<S> for ContactForm {
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("multipart/form-data"));

        let result = if is_multipart {
            read_multipart(req, state).await
        } else {
            Form::<ContactForm>::from_request(req, state)
                .await
                .map(|Form(input)| input)
                .map_err(anyhow::Error::from)
        };

        Ok(result.unwrap_or_else(|err| {
            tracing::debug!(err = %err, "unreadable contact form, treating as empty");

            ContactForm::default()
        }))
    }
}

async fn read_multipart<S: Send + Sync>(
    req: Request,
    state: &S,
) -> anyhow::Result<ContactForm> {
    let mut multipart = Multipart::from_request(req, state).await?;
    let mut form = ContactForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        let slot = match name.as_deref() {
            Some("name") => &mut form.name,
            Some("email") => &mut form.email,
            Some("message") => &mut form.message,
            _ => continue,
        };

        let value = field.text().await?;
        // First occurrence wins
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    Ok(form)
}

pub async fn action(input: ContactForm) -> impl IntoResponse {
    // Submissions are neither stored nor forwarded yet.
    tracing::info!(
        has_name = input.name.is_some(),
        has_email = input.email.is_some(),
        has_message = input.message.is_some(),
        "contact form submitted"
    );

    (StatusCode::FOUND, [(header::LOCATION, "/")])
}
