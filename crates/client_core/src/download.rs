use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::backend::FestPostBackend;

pub const DEFAULT_DOWNLOAD_NAME: &str = "festpost-image";

/// `{name}.png`, falling back to the default name when none is given.
pub fn download_file_name(suggested_name: Option<&str>) -> String {
    let name = suggested_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_DOWNLOAD_NAME);
    let name: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    format!("{name}.png")
}

pub async fn save_image(
    backend: &dyn FestPostBackend,
    image_url: &str,
    suggested_name: Option<&str>,
    download_dir: &Path,
) -> Result<PathBuf> {
    let bytes = backend
        .fetch_image_bytes(image_url)
        .await
        .with_context(|| format!("failed to fetch image '{image_url}'"))?;

    tokio::fs::create_dir_all(download_dir)
        .await
        .with_context(|| format!("failed to create '{}'", download_dir.display()))?;
    let path = download_dir.join(download_file_name(suggested_name));
    tokio::fs::write(&path, &bytes)
        .await
        .with_context(|| format!("failed to write '{}'", path.display()))?;

    info!(path = %path.display(), size_bytes = bytes.len(), "saved image");
    Ok(path)
}
