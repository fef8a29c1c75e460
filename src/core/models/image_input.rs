use std::sync::Arc;

use crate::global_constants;

#[derive(Clone)]
pub struct ImageInput {
    pub file_name: String,
    pub mime_type: String,
    bytes: Arc<[u8]>,
}

impl std::fmt::Debug for ImageInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageInput")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl ImageInput {
    /// Accepts the payload only when `mime_type` is an `image/*` type.
    pub fn accept(file_name: String, mime_type: String, bytes: Vec<u8>) -> Option<Self> {
        if !Self::is_image_mime_type(&mime_type) {
            log::debug!(
                "[IMAGE_INPUT] ignoring {} with non-image type {}",
                file_name,
                mime_type
            );
            return None;
        }

        log::debug!(
            "[IMAGE_INPUT] accepted {} ({}, {} bytes)",
            file_name,
            mime_type,
            bytes.len()
        );

        Some(Self {
            file_name,
            mime_type,
            bytes: Arc::from(bytes),
        })
    }

    pub fn is_image_mime_type(mime_type: &str) -> bool {
        mime_type
            .to_ascii_lowercase()
            .starts_with(global_constants::IMAGE_MIME_PREFIX)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_keeps_image_payload() {
        let input = ImageInput::accept(
            "scan.png".to_string(),
            "image/png".to_string(),
            vec![1, 2, 3],
        )
        .unwrap();

        assert_eq!(input.file_name, "scan.png");
        assert_eq!(input.mime_type, "image/png");
        assert_eq!(input.bytes(), &[1, 2, 3]);
    }

    #[test]
    fn test_accept_rejects_non_image_mime_type() {
        let input = ImageInput::accept(
            "notes.txt".to_string(),
            "text/plain".to_string(),
            b"hello".to_vec(),
        );

        assert!(input.is_none());
    }

    #[test]
    fn test_is_image_mime_type_ignores_case() {
        assert!(ImageInput::is_image_mime_type("IMAGE/JPEG"));
        assert!(!ImageInput::is_image_mime_type("application/pdf"));
        assert!(!ImageInput::is_image_mime_type(""));
    }

    #[test]
    fn test_clone_shares_payload() {
        let input = ImageInput::accept(
            "scan.webp".to_string(),
            "image/webp".to_string(),
            vec![9; 16],
        )
        .unwrap();

        let cloned = input.clone();

        assert_eq!(cloned.bytes().as_ptr(), input.bytes().as_ptr());
    }
}
