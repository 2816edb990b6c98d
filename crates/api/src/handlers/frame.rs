use crate::errors::ApiError;
use crate::state::AppState;
use axum::extract::State;
use axum::http::{header, HeaderMap, Uri};
use axum::response::Html;
use tracing::{instrument, warn};

/// Host as the client sent it: the `Host` header, or the URI authority for
/// HTTP/2 requests. Any port is kept.
pub fn inbound_host(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .or_else(|| uri.authority().map(|authority| authority.to_string()))
        .filter(|host| !host.is_empty())
}

#[instrument(skip_all, name = "masked_redirect")]
pub async fn masked_redirect(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Html<String>, ApiError> {
    let Some(host) = inbound_host(&headers, &uri) else {
        warn!("Request without Host header");
        return Err(ApiError::MissingHost);
    };

    let frame = state.build_frame.execute(&host).await?;
    let html = state.renderer.render(&frame).await?;

    Ok(Html(html))
}
