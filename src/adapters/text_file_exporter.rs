use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::TextExporter;
use crate::core::models::{ExtractionResult, UserSettings};
use crate::global_constants;

pub struct TextFileExporter {
    target_directory: PathBuf,
}

impl TextFileExporter {
    pub fn build(settings: &UserSettings) -> Self {
        Self::for_directory(settings.resolve_export_directory())
    }

    pub fn for_directory(target_directory: PathBuf) -> Self {
        log::info!("[EXPORT] Exporting text into {:?}", target_directory);
        Self { target_directory }
    }

    pub fn target_path(&self) -> PathBuf {
        self.target_directory.join(global_constants::EXPORT_FILE_NAME)
    }
}

#[async_trait]
impl TextExporter for TextFileExporter {
    async fn export(&self, result: &ExtractionResult) -> Result<PathBuf> {
        let target_path = self.target_path();

        tokio::fs::create_dir_all(&self.target_directory)
            .await
            .with_context(|| format!("Failed to create {:?}", self.target_directory))?;

        tokio::fs::write(&target_path, result.as_str().as_bytes())
            .await
            .with_context(|| format!("Failed to write {:?}", target_path))?;

        log::info!(
            "[EXPORT] Wrote {} bytes to {:?}",
            result.as_str().len(),
            target_path
        );

        Ok(target_path)
    }
}
