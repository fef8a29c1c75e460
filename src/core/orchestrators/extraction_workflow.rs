use std::sync::Arc;

use futures::channel::mpsc;
use futures::stream::{self, BoxStream};
use futures::StreamExt;

use crate::core::interfaces::adapters::TextRecognizer;
use crate::core::models::{
    ExtractionResult, ImageInput, RecognitionEvent, RecognitionProgress, RecognizedText,
    WorkflowState, RECOGNITION_LANGUAGES,
};
use crate::core::services::text_normalizer;

/// Runs one recognition attempt and yields its progress followed by a single
/// `Finished` event.
pub fn run_recognition(
    recognizer: Arc<dyn TextRecognizer>,
    image: ImageInput,
) -> BoxStream<'static, RecognitionEvent> {
    let (sender, receiver) = mpsc::unbounded();

    let recognition = async move {
        let progress_sender = sender.clone();
        let report_progress = move |progress: RecognitionProgress| {
            let _ = progress_sender.unbounded_send(RecognitionEvent::Progress(progress));
        };

        let outcome = recognizer
            .recognize(&image, &RECOGNITION_LANGUAGES, &report_progress)
            .await
            .map_err(|error| format!("{:#}", error));

        let _ = sender.unbounded_send(RecognitionEvent::Finished(outcome));
    };

    let driver = stream::once(recognition).filter_map(|()| async { None::<RecognitionEvent> });

    stream::select(driver, receiver).boxed()
}

pub struct ExtractionWorkflow {
    recognizer: Arc<dyn TextRecognizer>,
    state: WorkflowState,
    image: Option<ImageInput>,
    progress: RecognitionProgress,
    result: Option<ExtractionResult>,
}

impl ExtractionWorkflow {
    pub fn build(recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self {
            recognizer,
            state: WorkflowState::Idle,
            image: None,
            progress: RecognitionProgress::ZERO,
            result: None,
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn image(&self) -> Option<&ImageInput> {
        self.image.as_ref()
    }

    pub fn progress(&self) -> RecognitionProgress {
        self.progress
    }

    pub fn result(&self) -> Option<&ExtractionResult> {
        self.result.as_ref()
    }

    pub fn recognizer(&self) -> Arc<dyn TextRecognizer> {
        self.recognizer.clone()
    }

    pub fn is_recognizing(&self) -> bool {
        self.state == WorkflowState::Recognizing
    }

    pub fn can_extract(&self) -> bool {
        self.image.is_some() && !self.is_recognizing()
    }

    /// Stores a newly selected image. Returns `false` while a recognition is in flight.
    pub fn select_image(&mut self, image: ImageInput) -> bool {
        if self.is_recognizing() {
            log::warn!(
                "[WORKFLOW] Ignoring selection of {} while recognition is running",
                image.file_name
            );
            return false;
        }

        log::info!(
            "[WORKFLOW] Selected image {} ({})",
            image.file_name,
            image.mime_type
        );

        self.image = Some(image);
        self.result = None;
        self.progress = RecognitionProgress::ZERO;
        self.state = WorkflowState::ImageSelected;
        true
    }

    /// Moves into `Recognizing` and hands back the image to recognize.
    pub fn begin_extraction(&mut self) -> Option<ImageInput> {
        if self.is_recognizing() {
            log::warn!("[WORKFLOW] Extraction already running, ignoring trigger");
            return None;
        }

        let image = match &self.image {
            Some(image) => image.clone(),
            None => {
                log::debug!("[WORKFLOW] No image selected, ignoring trigger");
                return None;
            }
        };

        log::info!("[WORKFLOW] Starting extraction for {}", image.file_name);

        self.state = WorkflowState::Recognizing;
        self.progress = RecognitionProgress::ZERO;
        self.result = None;
        Some(image)
    }

    pub fn apply_recognition_event(&mut self, event: RecognitionEvent) {
        match event {
            RecognitionEvent::Progress(progress) => self.record_progress(progress),
            RecognitionEvent::Finished(outcome) => self.finish_recognition(outcome),
        }
    }

    pub fn record_progress(&mut self, progress: RecognitionProgress) {
        if !self.is_recognizing() {
            log::debug!(
                "[WORKFLOW] Dropping progress {} outside of recognition",
                progress
            );
            return;
        }

        self.progress = self.progress.max(progress);
    }

    pub fn finish_recognition(&mut self, outcome: Result<RecognizedText, String>) {
        if !self.is_recognizing() {
            log::debug!("[WORKFLOW] Dropping recognition outcome outside of recognition");
            return;
        }

        match outcome {
            Ok(recognized) => {
                let cleaned_text = text_normalizer::normalize(&recognized.text);
                log::info!(
                    "[WORKFLOW] Extraction complete: {} raw characters, {} after cleaning",
                    recognized.text.chars().count(),
                    cleaned_text.chars().count()
                );
                self.result = Some(ExtractionResult::from_cleaned_text(cleaned_text));
                self.state = WorkflowState::Completed;
            }
            Err(error) => {
                log::error!("[WORKFLOW] Extraction failed: {}", error);
                self.result = Some(ExtractionResult::Failed);
                self.state = WorkflowState::Failed;
            }
        }

        self.progress = RecognitionProgress::ZERO;
    }

    /// Drives one whole extraction attempt, applying every event in order.
    #[allow(dead_code)]
    pub async fn extract(&mut self) {
        let Some(image) = self.begin_extraction() else {
            return;
        };

        let mut events = run_recognition(self.recognizer(), image);
        while let Some(event) = events.next().await {
            self.apply_recognition_event(event);
        }
    }

    pub fn reset(&mut self) {
        if self.is_recognizing() {
            log::warn!("[WORKFLOW] Ignoring reset while recognition is running");
            return;
        }

        log::info!("[WORKFLOW] Resetting workflow");
        self.image = None;
        self.result = None;
        self.progress = RecognitionProgress::ZERO;
        self.state = WorkflowState::Idle;
    }
}
