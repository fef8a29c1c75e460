mod image_file_loader;
mod tesseract_ocr_engine;
mod text_file_exporter;

pub use image_file_loader::load_image_file;
pub use tesseract_ocr_engine::TesseractOcrEngine;
pub use text_file_exporter::TextFileExporter;
