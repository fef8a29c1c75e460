mod extraction;
mod image_input;
mod recognition;
mod user_settings;

pub use extraction::{ExtractionResult, WorkflowState};
pub use image_input::ImageInput;
pub use recognition::{
    EngineEvent, RecognitionEvent, RecognitionLanguage, RecognitionProgress, RecognizedText,
    RECOGNITION_LANGUAGES,
};
pub use user_settings::{ThemeMode, UserSettings};
