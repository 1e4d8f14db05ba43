//! OCR adapter over an external recognition engine.

mod tesseract;

pub use tesseract::TesseractEngine;

use crate::error::OcrError;
use image::DynamicImage;

/// Result type for OCR operations.
pub type Result<T> = std::result::Result<T, OcrError>;

/// Trait for OCR engine implementations.
pub trait OcrEngine {
    /// Recognize text in a decoded raster image.
    ///
    /// An image without recognizable text yields an empty string; callers
    /// cannot distinguish that from genuinely empty content.
    fn recognize(&self, image: &DynamicImage) -> Result<String>;
}
