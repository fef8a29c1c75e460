#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecognitionLanguage {
    English,
    Hindi,
}

impl RecognitionLanguage {
    pub fn code(&self) -> &'static str {
        match self {
            RecognitionLanguage::English => "eng",
            RecognitionLanguage::Hindi => "hin",
        }
    }

    /// Joins languages the way Tesseract expects them, e.g. `eng+hin`.
    pub fn join_codes(languages: &[RecognitionLanguage]) -> String {
        languages
            .iter()
            .map(RecognitionLanguage::code)
            .collect::<Vec<_>>()
            .join("+")
    }
}

pub const RECOGNITION_LANGUAGES: [RecognitionLanguage; 2] =
    [RecognitionLanguage::English, RecognitionLanguage::Hindi];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RecognitionProgress(u8);

impl RecognitionProgress {
    pub const ZERO: Self = Self(0);

    #[allow(dead_code)]
    pub fn from_percent(percent: u8) -> Self {
        Self(percent.min(100))
    }

    pub fn from_fraction(fraction: f32) -> Self {
        if !fraction.is_finite() {
            return Self::ZERO;
        }
        let percent = (fraction * 100.0).round().clamp(0.0, 100.0);
        Self(percent as u8)
    }

    pub fn percent(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for RecognitionProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecognizedText {
    pub text: String,
}

/// Phase-tagged progress as reported by an OCR engine.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineEvent {
    pub status: String,
    pub progress: f32,
}

impl EngineEvent {
    pub fn new(status: &str, progress: f32) -> Self {
        Self {
            status: status.to_string(),
            progress,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RecognitionEvent {
    Progress(RecognitionProgress),
    Finished(Result<RecognizedText, String>),
}
