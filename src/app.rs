use std::sync::Arc;

use iced::{Element, Task};

use crate::adapters::{TesseractOcrEngine, TextFileExporter};
use crate::core::interfaces::adapters::{EngineEventSink, OcrEngine};
use crate::core::models::{ImageInput, RecognitionLanguage, UserSettings};
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::core::orchestrators::extraction_workflow::ExtractionWorkflow;
use crate::core::services::RecognitionAdapter;

struct UnavailableOcrEngine {
    reason: String,
}

#[async_trait::async_trait]
impl OcrEngine for UnavailableOcrEngine {
    async fn recognize(
        &self,
        _image: &ImageInput,
        _languages: &[RecognitionLanguage],
        _on_event: &EngineEventSink<'_>,
    ) -> anyhow::Result<String> {
        anyhow::bail!("OCR engine not available: {}", self.reason)
    }
}

pub struct PiiMaskApp {
    orchestrator: AppOrchestrator,
}

impl PiiMaskApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("[APP] Failed to load settings: {}, using defaults", e);
            UserSettings::default()
        });

        let engine: Arc<dyn OcrEngine> = match TesseractOcrEngine::build(&settings) {
            Ok(engine) => {
                log::info!("[APP] Tesseract OCR engine initialized successfully");
                Arc::new(engine)
            }
            Err(e) => {
                log::error!("[APP] Failed to initialize Tesseract OCR engine: {}", e);
                Arc::new(UnavailableOcrEngine {
                    reason: e.to_string(),
                })
            }
        };

        let workflow = ExtractionWorkflow::build(Arc::new(RecognitionAdapter::build(engine)));
        let exporter = Arc::new(TextFileExporter::build(&settings));

        let orchestrator = AppOrchestrator::build(workflow, exporter, settings);

        (Self { orchestrator }, Task::none())
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view()
    }

    pub fn handle_subscription(&self) -> iced::Subscription<OrchestratorMessage> {
        use iced::window;

        iced::event::listen_with(|event, _status, _id| {
            if let iced::Event::Window(window::Event::FileDropped(path)) = event {
                return Some(OrchestratorMessage::FileDropped(path));
            }
            None
        })
    }
}
