use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::ExtractionResult;

#[async_trait]
pub trait TextExporter: Send + Sync {
    async fn export(&self, result: &ExtractionResult) -> Result<PathBuf>;
}
