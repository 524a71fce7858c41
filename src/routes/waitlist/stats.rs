//! src/routes/waitlist/stats.rs
use crate::routes::error_chain_fmt;
use crate::store::{StoreError, WaitlistStore};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsResponse {
    total_subscribers: usize,
    emails: Vec<String>,
}

#[derive(thiserror::Error)]
#[error("Failed to load stats")]
pub struct StatsError(#[from] StoreError);

impl std::fmt::Debug for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for StatsError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

/// Unauthenticated admin read-out of the full waitlist.
#[tracing::instrument(name = "Reading waitlist stats", skip(store))]
pub async fn waitlist_stats(store: web::Data<WaitlistStore>) -> Result<HttpResponse, StatsError> {
    let emails = store.load()?;
    Ok(HttpResponse::Ok().json(StatsResponse {
        total_subscribers: emails.len(),
        emails,
    }))
}
