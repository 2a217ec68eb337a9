use std::path::Path;

use anyhow::{Context, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub name: String,
    pub text: String,
}

/// Invalid UTF-8 is replaced, not rejected.
pub async fn load_text(path: impl AsRef<Path>) -> Result<LoadedFile> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
    let text = String::from_utf8_lossy(body).into_owned();
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    tracing::debug!(target: "form", file = %name, chars = text.chars().count(), "file loaded");
    Ok(LoadedFile { name, text })
}
