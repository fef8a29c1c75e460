use std::path::Path;

use anyhow::{Context, Result};

use crate::core::models::ImageInput;

const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// Guesses the MIME type from the file extension, the same way a browser
/// fills in `File.type`.
pub fn guess_mime_type(path: &Path) -> &'static str {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(UNKNOWN_MIME_TYPE)
}

/// Reads `path` into an [`ImageInput`].
///
/// Files that are not `image/*` are skipped without being read and yield `Ok(None)`.
pub async fn load_image_file(path: &Path) -> Result<Option<ImageInput>> {
    let mime_type = guess_mime_type(path);
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    if !ImageInput::is_image_mime_type(mime_type) {
        log::debug!(
            "[IMAGE_LOADER] Ignoring {:?}, detected type {}",
            path,
            mime_type
        );
        return Ok(None);
    }

    log::info!("[IMAGE_LOADER] Reading {:?} ({})", path, mime_type);

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image file {:?}", path))?;

    Ok(ImageInput::accept(file_name, mime_type.to_string(), bytes))
}
