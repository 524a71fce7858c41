//! src/routes/waitlist/download.rs
use crate::routes::error_chain_fmt;
use crate::store::{StoreError, WaitlistStore};
use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_DISPOSITION;
use actix_web::{HttpResponse, ResponseError, web};

#[derive(thiserror::Error)]
#[error("Failed to download waitlist")]
pub struct DownloadError(#[from] StoreError);

impl std::fmt::Debug for DownloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for DownloadError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

/// One-column CSV of the waitlist in storage order, served as an attachment.
#[tracing::instrument(name = "Exporting waitlist as CSV", skip(store))]
pub async fn download_waitlist(
    store: web::Data<WaitlistStore>,
) -> Result<HttpResponse, DownloadError> {
    let emails = store.load()?;
    let mut csv = String::from("Email");
    for email in &emails {
        csv.push('\n');
        csv.push_str(email);
    }
    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((CONTENT_DISPOSITION, "attachment; filename=waitlist.csv"))
        .body(csv))
}
