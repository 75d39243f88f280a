use std::path::PathBuf;
use std::sync::Arc;

use crate::cv_client::CvSource;
use crate::view::templates::PageTemplates;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Where the CV document comes from. Default: `HttpCvSource` against `CV_API_URL`.
    pub source: Arc<dyn CvSource>,
    pub assets_dir: PathBuf,
    pub templates: Arc<PageTemplates>,
}
