use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::image::Handle;
use iced::{Element, Task};

use crate::adapters::load_image_file;
use crate::core::interfaces::adapters::TextExporter;
use crate::core::models::{ImageInput, RecognitionEvent, UserSettings, WorkflowState};
use crate::core::orchestrators::extraction_workflow::{run_recognition, ExtractionWorkflow};
use crate::global_constants;
use crate::presentation::extraction_view;

pub struct AppOrchestrator {
    workflow: ExtractionWorkflow,
    exporter: Arc<dyn TextExporter>,
    settings: UserSettings,
    preview: Option<Handle>,
    status: String,
}

#[derive(Clone)]
pub enum OrchestratorMessage {
    PickImage,
    ImagePicked(Option<PathBuf>),
    FileDropped(PathBuf),
    ImageLoaded(Result<Option<ImageInput>, String>),
    ExtractText,
    Recognition(RecognitionEvent),
    DownloadText,
    DownloadFinished(Result<PathBuf, String>),
    Reset,
    ToggleTheme,
}

impl std::fmt::Debug for OrchestratorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorMessage::PickImage => write!(f, "PickImage"),
            OrchestratorMessage::ImagePicked(path) => write!(f, "ImagePicked({:?})", path),
            OrchestratorMessage::FileDropped(path) => write!(f, "FileDropped({:?})", path),
            OrchestratorMessage::ImageLoaded(result) => match result {
                Ok(Some(image)) => write!(f, "ImageLoaded({})", image.file_name),
                Ok(None) => write!(f, "ImageLoaded(ignored)"),
                Err(e) => write!(f, "ImageLoaded(Err({}))", e),
            },
            OrchestratorMessage::ExtractText => write!(f, "ExtractText"),
            OrchestratorMessage::Recognition(RecognitionEvent::Progress(progress)) => {
                write!(f, "Recognition(Progress({}))", progress)
            }
            OrchestratorMessage::Recognition(RecognitionEvent::Finished(result)) => {
                write!(f, "Recognition(Finished({:?}))", result.is_ok())
            }
            OrchestratorMessage::DownloadText => write!(f, "DownloadText"),
            OrchestratorMessage::DownloadFinished(result) => {
                write!(f, "DownloadFinished({:?})", result)
            }
            OrchestratorMessage::Reset => write!(f, "Reset"),
            OrchestratorMessage::ToggleTheme => write!(f, "ToggleTheme"),
        }
    }
}

impl AppOrchestrator {
    pub fn build(
        workflow: ExtractionWorkflow,
        exporter: Arc<dyn TextExporter>,
        settings: UserSettings,
    ) -> Self {
        Self {
            workflow,
            exporter,
            settings,
            preview: None,
            status: global_constants::STATUS_DROP_HINT.to_string(),
        }
    }

    pub fn workflow(&self) -> &ExtractionWorkflow {
        &self.workflow
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    pub fn preview(&self) -> Option<&Handle> {
        self.preview.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        match &message {
            OrchestratorMessage::Recognition(RecognitionEvent::Progress(_)) => {
                log::debug!("[ORCHESTRATOR] Received message: {:?}", message)
            }
            _ => log::info!("[ORCHESTRATOR] Received message: {:?}", message),
        }

        match message {
            OrchestratorMessage::PickImage => self.handle_pick_image(),
            OrchestratorMessage::ImagePicked(path) => self.handle_image_picked(path),
            OrchestratorMessage::FileDropped(path) => self.handle_file_dropped(path),
            OrchestratorMessage::ImageLoaded(result) => self.handle_image_loaded(result),
            OrchestratorMessage::ExtractText => self.handle_extract_text(),
            OrchestratorMessage::Recognition(event) => self.handle_recognition_event(event),
            OrchestratorMessage::DownloadText => self.handle_download_text(),
            OrchestratorMessage::DownloadFinished(result) => {
                self.handle_download_finished(result)
            }
            OrchestratorMessage::Reset => self.handle_reset(),
            OrchestratorMessage::ToggleTheme => self.handle_toggle_theme(),
        }
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        extraction_view::render(self)
    }

    fn handle_pick_image(&mut self) -> Task<OrchestratorMessage> {
        if self.workflow.is_recognizing() {
            return Task::none();
        }

        Task::future(async {
            let picked = rfd::AsyncFileDialog::new()
                .set_title("Select an image")
                .add_filter("Images", &global_constants::PICKER_IMAGE_EXTENSIONS)
                .pick_file()
                .await;

            OrchestratorMessage::ImagePicked(picked.map(|handle| handle.path().to_path_buf()))
        })
    }

    fn handle_image_picked(&mut self, path: Option<PathBuf>) -> Task<OrchestratorMessage> {
        match path {
            Some(path) => Self::load_image(path),
            None => {
                log::debug!("[ORCHESTRATOR] File picker closed without a selection");
                Task::none()
            }
        }
    }

    fn handle_file_dropped(&mut self, path: PathBuf) -> Task<OrchestratorMessage> {
        if self.workflow.is_recognizing() {
            log::warn!(
                "[ORCHESTRATOR] Ignoring dropped file {:?} while recognizing",
                path
            );
            return Task::none();
        }

        Self::load_image(path)
    }

    fn load_image(path: PathBuf) -> Task<OrchestratorMessage> {
        Task::future(async move {
            let outcome = load_image_file(&path)
                .await
                .map_err(|e| format!("{:#}", e));
            OrchestratorMessage::ImageLoaded(outcome)
        })
    }

    fn handle_image_loaded(
        &mut self,
        result: Result<Option<ImageInput>, String>,
    ) -> Task<OrchestratorMessage> {
        match result {
            Ok(Some(image)) => {
                let file_name = image.file_name.clone();
                let preview = Handle::from_bytes(image.bytes().to_vec());

                if self.workflow.select_image(image) {
                    self.preview = Some(preview);
                    self.status = format!("Selected {}", file_name);
                }
            }
            Ok(None) => {
                log::debug!("[ORCHESTRATOR] Selection was not an image, ignoring");
            }
            Err(e) => {
                log::error!("[ORCHESTRATOR] Failed to load image: {}", e);
                self.status = format!("Could not open image: {}", e);
            }
        }
        Task::none()
    }

    fn handle_extract_text(&mut self) -> Task<OrchestratorMessage> {
        let Some(image) = self.workflow.begin_extraction() else {
            return Task::none();
        };

        self.status = global_constants::STATUS_EXTRACTING.to_string();

        Task::stream(run_recognition(self.workflow.recognizer(), image))
            .map(OrchestratorMessage::Recognition)
    }

    fn handle_recognition_event(&mut self, event: RecognitionEvent) -> Task<OrchestratorMessage> {
        self.workflow.apply_recognition_event(event);

        match self.workflow.state() {
            WorkflowState::Completed => {
                self.status = "Extraction complete".to_string();
            }
            WorkflowState::Failed => {
                self.status = "Extraction failed".to_string();
            }
            _ => {}
        }
        Task::none()
    }

    fn handle_download_text(&mut self) -> Task<OrchestratorMessage> {
        let Some(result) = self.workflow.result().cloned() else {
            log::debug!("[ORCHESTRATOR] Nothing to download yet");
            return Task::none();
        };

        let exporter = self.exporter.clone();

        Task::future(async move {
            let outcome = exporter
                .export(&result)
                .await
                .map_err(|e| format!("{:#}", e));
            OrchestratorMessage::DownloadFinished(outcome)
        })
    }

    fn handle_download_finished(
        &mut self,
        result: Result<PathBuf, String>,
    ) -> Task<OrchestratorMessage> {
        match result {
            Ok(path) => {
                self.status = format!("Saved to {}", path.display());
            }
            Err(e) => {
                log::error!("[ORCHESTRATOR] Failed to export text: {}", e);
                self.status = format!("Download failed: {}", e);
            }
        }
        Task::none()
    }

    fn handle_reset(&mut self) -> Task<OrchestratorMessage> {
        if self.workflow.is_recognizing() {
            return Task::none();
        }

        self.workflow.reset();
        self.preview = None;
        self.status = global_constants::STATUS_DROP_HINT.to_string();
        Task::none()
    }

    fn handle_toggle_theme(&mut self) -> Task<OrchestratorMessage> {
        self.settings.theme_mode = self.settings.theme_mode.toggled();

        if let Err(e) = self.settings.save() {
            log::warn!("[ORCHESTRATOR] Failed to save theme preference: {}", e);
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::interfaces::adapters::{ProgressSink, TextRecognizer};
    use crate::core::models::{
        ExtractionResult, RecognitionLanguage, RecognitionProgress, RecognizedText,
    };

    struct MockTextRecognizer;

    #[async_trait::async_trait]
    impl TextRecognizer for MockTextRecognizer {
        async fn recognize(
            &self,
            _image: &ImageInput,
            _languages: &[RecognitionLanguage],
            _progress: &ProgressSink<'_>,
        ) -> anyhow::Result<RecognizedText> {
            Ok(RecognizedText {
                text: "test".to_string(),
            })
        }
    }

    struct MockTextExporter;

    #[async_trait::async_trait]
    impl TextExporter for MockTextExporter {
        async fn export(&self, _result: &ExtractionResult) -> anyhow::Result<PathBuf> {
            Ok(PathBuf::from("/tmp/extracted_text.txt"))
        }
    }

    fn create_test_orchestrator() -> AppOrchestrator {
        AppOrchestrator::build(
            ExtractionWorkflow::build(Arc::new(MockTextRecognizer)),
            Arc::new(MockTextExporter),
            UserSettings::default(),
        )
    }

    fn test_image() -> ImageInput {
        ImageInput::accept("id.png".to_string(), "image/png".to_string(), vec![1, 2, 3]).unwrap()
    }

    #[test]
    fn test_build_creates_orchestrator_with_correct_initial_state() {
        let orchestrator = create_test_orchestrator();

        assert_eq!(orchestrator.workflow().state(), WorkflowState::Idle);
        assert!(orchestrator.preview().is_none());
        assert_eq!(orchestrator.status(), global_constants::STATUS_DROP_HINT);
    }

    #[test]
    fn test_image_loaded_selects_image_and_sets_preview() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::ImageLoaded(Ok(Some(test_image()))));

        assert_eq!(orchestrator.workflow().state(), WorkflowState::ImageSelected);
        assert!(orchestrator.preview().is_some());
        assert!(orchestrator.status().contains("id.png"));
    }

    #[test]
    fn test_ignored_selection_leaves_state_untouched() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::ImageLoaded(Ok(None)));

        assert_eq!(orchestrator.workflow().state(), WorkflowState::Idle);
        assert!(orchestrator.workflow().image().is_none());
        assert_eq!(orchestrator.status(), global_constants::STATUS_DROP_HINT);
    }

    #[test]
    fn test_load_error_updates_status_only() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::ImageLoaded(Err(
            "permission denied".to_string(),
        )));

        assert_eq!(orchestrator.workflow().state(), WorkflowState::Idle);
        assert!(orchestrator.status().contains("permission denied"));
    }

    #[test]
    fn test_extract_text_enters_recognizing() {
        let mut orchestrator = create_test_orchestrator();
        let _ = orchestrator.update(OrchestratorMessage::ImageLoaded(Ok(Some(test_image()))));

        let _ = orchestrator.update(OrchestratorMessage::ExtractText);

        assert_eq!(orchestrator.workflow().state(), WorkflowState::Recognizing);
        assert_eq!(orchestrator.status(), global_constants::STATUS_EXTRACTING);
    }

    #[test]
    fn test_extract_text_without_image_is_noop() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::ExtractText);

        assert_eq!(orchestrator.workflow().state(), WorkflowState::Idle);
    }

    #[test]
    fn test_recognition_events_complete_extraction() {
        let mut orchestrator = create_test_orchestrator();
        let _ = orchestrator.update(OrchestratorMessage::ImageLoaded(Ok(Some(test_image()))));
        let _ = orchestrator.update(OrchestratorMessage::ExtractText);

        let _ = orchestrator.update(OrchestratorMessage::Recognition(
            RecognitionEvent::Progress(RecognitionProgress::from_percent(55)),
        ));
        assert_eq!(orchestrator.workflow().progress().percent(), 55);

        let _ = orchestrator.update(OrchestratorMessage::Recognition(
            RecognitionEvent::Finished(Ok(RecognizedText {
                text: "Hello   World\n\n\nTest•".to_string(),
            })),
        ));

        assert_eq!(orchestrator.workflow().state(), WorkflowState::Completed);
        assert_eq!(
            orchestrator.workflow().result().unwrap().as_str(),
            "Hello World\nTest"
        );
        assert_eq!(orchestrator.workflow().progress().percent(), 0);
    }

    #[test]
    fn test_dropped_file_while_recognizing_keeps_image() {
        let mut orchestrator = create_test_orchestrator();
        let _ = orchestrator.update(OrchestratorMessage::ImageLoaded(Ok(Some(test_image()))));
        let _ = orchestrator.update(OrchestratorMessage::ExtractText);

        let _ = orchestrator.update(OrchestratorMessage::FileDropped(PathBuf::from(
            "/tmp/other.png",
        )));

        assert_eq!(orchestrator.workflow().state(), WorkflowState::Recognizing);
        assert_eq!(orchestrator.workflow().image().unwrap().file_name, "id.png");
    }

    #[test]
    fn test_reset_clears_image_and_preview() {
        let mut orchestrator = create_test_orchestrator();
        let _ = orchestrator.update(OrchestratorMessage::ImageLoaded(Ok(Some(test_image()))));

        let _ = orchestrator.update(OrchestratorMessage::Reset);

        assert_eq!(orchestrator.workflow().state(), WorkflowState::Idle);
        assert!(orchestrator.preview().is_none());
        assert_eq!(orchestrator.status(), global_constants::STATUS_DROP_HINT);
    }

    #[test]
    fn test_reset_while_recognizing_is_ignored() {
        let mut orchestrator = create_test_orchestrator();
        let _ = orchestrator.update(OrchestratorMessage::ImageLoaded(Ok(Some(test_image()))));
        let _ = orchestrator.update(OrchestratorMessage::ExtractText);

        let _ = orchestrator.update(OrchestratorMessage::Reset);

        assert_eq!(orchestrator.workflow().state(), WorkflowState::Recognizing);
        assert!(orchestrator.preview().is_some());
    }

    #[test]
    fn test_download_finished_reports_saved_path() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::DownloadFinished(Ok(PathBuf::from(
            "/tmp/extracted_text.txt",
        ))));

        assert!(orchestrator.status().contains("extracted_text.txt"));
    }

    #[test]
    fn test_download_failure_reports_error() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::DownloadFinished(Err(
            "disk full".to_string(),
        )));

        assert!(orchestrator.status().contains("disk full"));
    }

    #[test]
    fn test_message_debug_hides_image_payload() {
        let message = OrchestratorMessage::ImageLoaded(Ok(Some(test_image())));

        assert_eq!(format!("{:?}", message), "ImageLoaded(id.png)");
    }
}
