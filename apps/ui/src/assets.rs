use std::path::{Path, PathBuf};

use base64::Engine;
use tracing::{debug, error};

use crate::errors::RenderError;

/// Resolves `photo` against `assets_dir` unless it is already absolute.
pub fn resolve_asset_path(assets_dir: &Path, photo: &str) -> PathBuf {
    let path = Path::new(photo);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        assets_dir.join(path)
    }
}

/// Reads the profile photo and returns it as an inline `data:` URI.
/// The media type is always declared as PNG.
pub async fn load_photo_data_uri(assets_dir: &Path, photo: &str) -> Result<String, RenderError> {
    let path = resolve_asset_path(assets_dir, photo);

    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        error!("Failed to read photo {}: {e}", path.display());
        RenderError::MissingAsset(photo.to_string())
    })?;

    debug!("Embedding {} ({} bytes)", path.display(), bytes.len());

    Ok(format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(&bytes)
    ))
}
