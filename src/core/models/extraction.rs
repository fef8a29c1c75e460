use crate::global_constants;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WorkflowState {
    #[default]
    Idle,
    ImageSelected,
    Recognizing,
    Completed,
    Failed,
}

impl std::fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowState::Idle => write!(f, "Idle"),
            WorkflowState::ImageSelected => write!(f, "ImageSelected"),
            WorkflowState::Recognizing => write!(f, "Recognizing"),
            WorkflowState::Completed => write!(f, "Completed"),
            WorkflowState::Failed => write!(f, "Failed"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractionResult {
    Text(String),
    NoTextFound,
    Failed,
}

impl ExtractionResult {
    /// Empty cleaned text becomes the "no text found" sentinel.
    pub fn from_cleaned_text(cleaned_text: String) -> Self {
        if cleaned_text.is_empty() {
            ExtractionResult::NoTextFound
        } else {
            ExtractionResult::Text(cleaned_text)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ExtractionResult::Text(text) => text,
            ExtractionResult::NoTextFound => global_constants::NO_TEXT_FOUND_MESSAGE,
            ExtractionResult::Failed => global_constants::EXTRACTION_ERROR_MESSAGE,
        }
    }
}

impl std::fmt::Display for ExtractionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
