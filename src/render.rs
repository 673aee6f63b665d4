use std::path::Path;

use axum::response::Html;
use tera::{Context, Tera};

use crate::error::PageError;

/// Render the template file at `path` with the derived page name in scope.
///
/// The file is read and rendered per request. There is no template cache, so
/// an edit on disk shows up on the next request, and a file that disappears
/// between the existence check and the read surfaces as a
/// [`PageError::ReadError`].
pub async fn render_page(path: &Path, page_name: &str) -> Result<Html<String>, PageError> {
    let source = tokio::fs::read_to_string(path).await?;

    let mut context = Context::new();
    context.insert("page_name", page_name);

    let body = Tera::one_off(&source, &context, true)?;
    Ok(Html(body))
}
