use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use brighella_domain::DomainError;
use tracing::error;

/// Clients only ever see a generic message; details stay in the server log.
#[derive(Debug)]
pub enum ApiError {
    MissingHost,
    Domain(DomainError),
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError::Domain(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingHost | ApiError::Domain(DomainError::TargetNotFound { .. }) => (
                StatusCode::BAD_REQUEST,
                "Unable to find redirect target",
            )
                .into_response(),
            ApiError::Domain(DomainError::TemplateRender(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Template parsing error",
            )
                .into_response(),
            ApiError::Domain(e) => {
                error!(error = %e, "Unexpected error while serving frame");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
