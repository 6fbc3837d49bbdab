use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    api::state::AppState,
    error::{AppError, Result},
};

#[derive(Debug, Deserialize)]
pub struct PdfProxyQuery {
    pub url: Option<String>,
}

/// GET /api/pdf-proxy?url=<URL>
///
/// Fetches `url` and re-serves the body with `Content-Type: application/pdf`
/// and `Content-Disposition: inline` so browser viewers render it in place
/// instead of downloading it. The upstream status and content type are
/// ignored; the body is buffered in full and passed through untouched.
pub async fn pdf_proxy(
    State(state): State<AppState>,
    Query(query): Query<PdfProxyQuery>,
) -> Result<Response> {
    let url = match query.url.filter(|u| !u.is_empty()) {
        Some(url) => url,
        None => return Err(AppError::BadRequest("Missing url".to_string())),
    };

    tracing::debug!("Relaying PDF from {}", url);

    let upstream = state.service_context.http_client
        .get(&url)
        .send()
        .await?;
    let body = upstream.bytes().await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, "inline"),
        ],
        body,
    ).into_response())
}
