mod recognition_adapter;
pub mod text_normalizer;

pub use recognition_adapter::RecognitionAdapter;
