//! Page pipeline: fetch → embed photo → build view → render HTML.
//!
//! Each step either succeeds or aborts the whole page; nothing is emitted
//! until every step has succeeded.

use std::path::Path;

use tracing::info;

use crate::assets::load_photo_data_uri;
use crate::cv_client::CvSource;
use crate::errors::RenderError;
use crate::view::{build_page, templates::PageTemplates};

pub async fn render_cv_page(
    source: &dyn CvSource,
    assets_dir: &Path,
    templates: &PageTemplates,
) -> Result<String, RenderError> {
    let doc = source.fetch().await?;
    let photo_src = load_photo_data_uri(assets_dir, &doc.header.photo).await?;

    let page = build_page(&doc, photo_src);
    let html = templates.render(&page)?;

    info!(
        "Rendered CV page for {} ({} sections, {} bytes)",
        page.hero.full_name,
        page.sections.len(),
        html.len()
    );
    Ok(html)
}
