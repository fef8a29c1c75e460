use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use async_trait::async_trait;
use image::{DynamicImage, ImageFormat};
use rusty_tesseract::{Args, Image as TesseractImage};

use crate::core::interfaces::adapters::{EngineEventSink, OcrEngine};
use crate::core::models::{EngineEvent, ImageInput, RecognitionLanguage, UserSettings};
use crate::global_constants;

static SCRATCH_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TesseractOcrEngine {
    dpi: Option<i32>,
}

impl TesseractOcrEngine {
    pub fn build(settings: &UserSettings) -> Result<Self> {
        log::info!("[TESSERACT_OCR] Initializing Tesseract OCR engine");
        Ok(Self {
            dpi: settings.tesseract_dpi,
        })
    }

    fn build_args(&self, languages: &[RecognitionLanguage]) -> Args {
        let mut args = Args::default();
        args.lang = RecognitionLanguage::join_codes(languages);
        if self.dpi.is_some() {
            args.dpi = self.dpi;
        }
        args
    }

    fn find_missing_languages(
        installed: &[String],
        requested: &[RecognitionLanguage],
    ) -> Vec<&'static str> {
        requested
            .iter()
            .map(RecognitionLanguage::code)
            .filter(|code| !installed.iter().any(|installed| installed == code))
            .collect()
    }

    fn decode_image(image: &ImageInput) -> Result<DynamicImage> {
        log::debug!(
            "[TESSERACT_OCR] Decoding {} ({} bytes)",
            image.file_name,
            image.bytes().len()
        );
        image::load_from_memory(image.bytes())
            .with_context(|| format!("Failed to decode image {}", image.file_name))
    }

    fn scratch_image_path() -> PathBuf {
        let sequence = SCRATCH_COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "{}-{}-{}.png",
            global_constants::APPLICATION_NAME,
            std::process::id(),
            sequence
        ))
    }

    /// Re-encodes the decoded image as PNG so the tesseract CLI always gets a format it reads.
    fn run_tesseract(image: &ImageInput, args: &Args) -> Result<String> {
        let dynamic_image = Self::decode_image(image)?;
        log::debug!(
            "[TESSERACT_OCR] Image dimensions: {}x{}",
            dynamic_image.width(),
            dynamic_image.height()
        );

        let scratch_path = Self::scratch_image_path();
        dynamic_image
            .save_with_format(&scratch_path, ImageFormat::Png)
            .with_context(|| format!("Failed to write scratch image {:?}", scratch_path))?;

        let extracted = TesseractImage::from_path(&scratch_path)
            .context("Failed to create Tesseract image")
            .and_then(|tesseract_image| {
                rusty_tesseract::image_to_string(&tesseract_image, args)
                    .context("Failed to extract text from image")
            });

        if let Err(e) = std::fs::remove_file(&scratch_path) {
            log::warn!("[TESSERACT_OCR] Could not remove {:?}: {}", scratch_path, e);
        }

        extracted
    }
}

#[async_trait]
impl OcrEngine for TesseractOcrEngine {
    async fn recognize(
        &self,
        image: &ImageInput,
        languages: &[RecognitionLanguage],
        on_event: &EngineEventSink<'_>,
    ) -> Result<String> {
        log::info!("[TESSERACT_OCR] Starting text extraction");

        on_event(EngineEvent::new(
            global_constants::ENGINE_STATUS_LOADING_CORE,
            0.0,
        ));
        let version = tokio::task::spawn_blocking(rusty_tesseract::get_tesseract_version)
            .await
            .context("Tesseract worker stopped unexpectedly")?
            .context("Tesseract is not installed or not on PATH")?;
        log::debug!("[TESSERACT_OCR] Using {}", version.trim());
        on_event(EngineEvent::new(
            global_constants::ENGINE_STATUS_LOADING_CORE,
            1.0,
        ));

        on_event(EngineEvent::new(
            global_constants::ENGINE_STATUS_LOADING_LANGUAGES,
            0.0,
        ));
        let installed = tokio::task::spawn_blocking(rusty_tesseract::get_tesseract_langs)
            .await
            .context("Tesseract worker stopped unexpectedly")?
            .context("Failed to list Tesseract languages")?;
        let missing = Self::find_missing_languages(&installed, languages);
        if !missing.is_empty() {
            anyhow::bail!(
                "Tesseract language data missing for: {}",
                missing.join(", ")
            );
        }
        on_event(EngineEvent::new(
            global_constants::ENGINE_STATUS_LOADING_LANGUAGES,
            1.0,
        ));

        on_event(EngineEvent::new(
            global_constants::ENGINE_STATUS_INITIALIZING_API,
            1.0,
        ));
        let args = self.build_args(languages);
        let owned_image = image.clone();

        on_event(EngineEvent::new(
            global_constants::ENGINE_STATUS_RECOGNIZING_TEXT,
            0.0,
        ));
        let extracted_text =
            tokio::task::spawn_blocking(move || Self::run_tesseract(&owned_image, &args))
                .await
                .context("Tesseract worker stopped unexpectedly")??;
        on_event(EngineEvent::new(
            global_constants::ENGINE_STATUS_RECOGNIZING_TEXT,
            1.0,
        ));

        log::info!(
            "[TESSERACT_OCR] Text extraction complete. Extracted {} characters",
            extracted_text.len()
        );
        log::debug!("[TESSERACT_OCR] Extracted text: {}", extracted_text);

        Ok(extracted_text)
    }
}
