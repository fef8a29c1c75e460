use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{ImageInput, RecognitionLanguage, RecognitionProgress, RecognizedText};

pub type ProgressSink<'a> = dyn Fn(RecognitionProgress) + Send + Sync + 'a;

#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(
        &self,
        image: &ImageInput,
        languages: &[RecognitionLanguage],
        progress: &ProgressSink<'_>,
    ) -> Result<RecognizedText>;
}
