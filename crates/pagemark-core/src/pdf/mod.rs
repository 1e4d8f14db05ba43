//! PDF processing module.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;
use image::DynamicImage;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Source of embedded page images.
pub trait PageImageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Extract the embedded raster images of a page (1-indexed).
    ///
    /// A page without images yields an empty vector, not an error.
    fn extract_images(&self, page: u32) -> Result<Vec<DynamicImage>>;
}
