pub const APPLICATION_NAME: &str = "pii-mask-ocr";
pub const APPLICATION_TITLE: &str = "PII Mask OCR Extractor";

pub const NO_TEXT_FOUND_MESSAGE: &str = "No text found.";
pub const EXTRACTION_ERROR_MESSAGE: &str = "❌ Error extracting text";

pub const EXPORT_FILE_NAME: &str = "extracted_text.txt";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const IMAGE_MIME_PREFIX: &str = "image/";
pub const PICKER_IMAGE_EXTENSIONS: [&str; 9] = [
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "pnm",
];

pub const ENGINE_STATUS_LOADING_CORE: &str = "loading tesseract core";
pub const ENGINE_STATUS_INITIALIZING_API: &str = "initializing api";
pub const ENGINE_STATUS_LOADING_LANGUAGES: &str = "loading language traineddata";
pub const ENGINE_STATUS_RECOGNIZING_TEXT: &str = "recognizing text";

pub const STATUS_DROP_HINT: &str = "Drop an image or click to select one";
pub const STATUS_EXTRACTING: &str = "Extracting Text...";
