use axum::{extract::State, response::Html};

use crate::errors::RenderError;
use crate::render::render_cv_page;
use crate::state::AppState;

/// GET /
/// Fetches the CV and renders the full page, or an error page if any step fails.
pub async fn handle_cv_page(State(state): State<AppState>) -> Result<Html<String>, RenderError> {
    let html = render_cv_page(state.source.as_ref(), &state.assets_dir, &state.templates).await?;
    Ok(Html(html))
}
