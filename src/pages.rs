//! The semi-static lookup middleware.
//!
//! Every request is mapped to a candidate template file; when the file is
//! there the page is rendered and the chain stops, otherwise the request is
//! handed to the next handler untouched.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::config::Config;
use crate::error::PageError;
use crate::render;

/// Middleware entry point. Install with
/// [`axum::middleware::from_fn_with_state`], passing the shared [`Config`]
/// as state.
///
/// Looks up `{folder_path}{path}.{file_ext}` for the request path. A failed
/// existence check (permissions, a file where a directory was expected)
/// counts as "not there" and the request falls through.
pub async fn serve_semi_static(
    State(config): State<Arc<Config>>,
    request: Request,
    next: Next,
) -> Result<Response, PageError> {
    let uri_path = request.uri().path().to_owned();
    let candidate = config.candidate_path(&uri_path);

    let exists = tokio::fs::try_exists(&candidate).await.unwrap_or(false);

    if exists {
        debug!("{} -> {}", uri_path, candidate.display());
        let page = render::render_page(&candidate, page_name(&uri_path)).await?;
        Ok(page.into_response())
    } else {
        Ok(next.run(request).await)
    }
}

/// Last segment of the request path, exposed to templates as `page_name`.
pub fn page_name(uri_path: &str) -> &str {
    uri_path.rsplit('/').next().unwrap_or(uri_path)
}
