use axum::http::Uri;
use axum::response::Redirect;
use tracing::debug;

pub async fn redirect_to_root(uri: Uri) -> Redirect {
    debug!(path = %uri.path(), "Redirecting to /");
    Redirect::temporary("/")
}
