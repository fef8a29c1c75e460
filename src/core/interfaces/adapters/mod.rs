mod ocr_engine;
mod text_exporter;
mod text_recognizer;

pub use ocr_engine::{EngineEventSink, OcrEngine};
pub use text_exporter::TextExporter;
pub use text_recognizer::{ProgressSink, TextRecognizer};
