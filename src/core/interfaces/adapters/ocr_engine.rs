use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{EngineEvent, ImageInput, RecognitionLanguage};

pub type EngineEventSink<'a> = dyn Fn(EngineEvent) + Send + Sync + 'a;

#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(
        &self,
        image: &ImageInput,
        languages: &[RecognitionLanguage],
        on_event: &EngineEventSink<'_>,
    ) -> Result<String>;
}
