//! src/routes/waitlist/submit.rs
use crate::domain::SubscriberEmail;
use crate::routes::error_chain_fmt;
use crate::store::{InsertError, WaitlistStore};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};

#[derive(serde::Deserialize)]
pub struct SubmitBody {
    email: String,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitResponse {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_subscribers: Option<usize>,
}

#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error("Please enter a valid email address")]
    Validation(#[source] ParseEmailError),
    #[error("This email is already on the waitlist!")]
    Duplicate,
    #[error("Something went wrong. Please try again.")]
    Storage(#[from] crate::store::StoreError),
}

#[derive(thiserror::Error, Debug)]
#[error("{0}")]
pub struct ParseEmailError(String);

impl std::fmt::Debug for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubscribeError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubscribeError::Validation(_) | SubscribeError::Duplicate => StatusCode::BAD_REQUEST,
            SubscribeError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(SubmitResponse {
            success: false,
            message: self.to_string(),
            total_subscribers: None,
        })
    }
}

#[tracing::instrument(
    name = "Adding a new waitlist signup",
    skip(body, store),
    fields(signup_email = %body.email)
)]
pub async fn subscribe(
    body: web::Json<SubmitBody>,
    store: web::Data<WaitlistStore>,
) -> Result<HttpResponse, SubscribeError> {
    let email = SubscriberEmail::parse(body.0.email)
        .map_err(|e| SubscribeError::Validation(ParseEmailError(e)))?;
    let total_subscribers = store.insert(email.as_ref()).map_err(|e| match e {
        InsertError::Duplicate => SubscribeError::Duplicate,
        InsertError::Storage(e) => SubscribeError::Storage(e),
    })?;
    tracing::info!(
        "New waitlist signup: {email}; total waitlist size: {total_subscribers}"
    );
    Ok(HttpResponse::Ok().json(SubmitResponse {
        success: true,
        message: "Welcome to the waitlist! We'll notify you when we launch.".into(),
        total_subscribers: Some(total_subscribers),
    }))
}
