use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::{OcrEngine, ProgressSink, TextRecognizer};
use crate::core::models::{
    EngineEvent, ImageInput, RecognitionLanguage, RecognitionProgress, RecognizedText,
};
use crate::global_constants;

/// Turns phase-tagged engine events into plain percent progress.
pub struct RecognitionAdapter {
    engine: Arc<dyn OcrEngine>,
}

impl RecognitionAdapter {
    pub fn build(engine: Arc<dyn OcrEngine>) -> Self {
        log::info!("[RECOGNITION] Building recognition adapter");
        Self { engine }
    }

    fn forward_engine_event(event: EngineEvent, progress: &ProgressSink<'_>) {
        if event.status != global_constants::ENGINE_STATUS_RECOGNIZING_TEXT {
            log::debug!(
                "[RECOGNITION] Skipping engine phase '{}' ({:.2})",
                event.status,
                event.progress
            );
            return;
        }

        let percent = RecognitionProgress::from_fraction(event.progress);
        log::debug!("[RECOGNITION] Progress {}", percent);
        progress(percent);
    }
}

#[async_trait]
impl TextRecognizer for RecognitionAdapter {
    async fn recognize(
        &self,
        image: &ImageInput,
        languages: &[RecognitionLanguage],
        progress: &ProgressSink<'_>,
    ) -> Result<RecognizedText> {
        log::info!(
            "[RECOGNITION] Recognizing {} with languages {}",
            image.file_name,
            RecognitionLanguage::join_codes(languages)
        );

        let on_event = |event: EngineEvent| Self::forward_engine_event(event, progress);

        let text = self
            .engine
            .recognize(image, languages, &on_event)
            .await
            .with_context(|| format!("Failed to recognize text in {}", image.file_name))?;

        log::info!(
            "[RECOGNITION] Recognized {} characters of raw text",
            text.chars().count()
        );

        Ok(RecognizedText { text })
    }
}
