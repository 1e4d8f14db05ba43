//! Page-range reading: embedded images through OCR into ordered page texts.

use image::DynamicImage;
use tracing::debug;

use crate::config::{ImagePolicy, ReaderConfig};
use crate::error::{PdfError, Result};
use crate::ocr::OcrEngine;
use crate::pdf::PageImageSource;
use crate::text;

/// Normalized OCR text for one page of the requested range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// Page number (1-indexed).
    pub page: u32,

    /// Normalized text of the page's selected images.
    pub text: String,
}

/// Read an inclusive 1-indexed page range, running every selected image
/// through OCR and normalization.
///
/// The range is validated against the document before any extraction work.
/// The result always holds `last - first + 1` entries in ascending page
/// order; a page without images contributes an empty string.
pub fn read_range<S, O>(
    source: &S,
    ocr: &O,
    config: &ReaderConfig,
    first: u32,
    last: u32,
) -> Result<Vec<PageText>>
where
    S: PageImageSource,
    O: OcrEngine,
{
    let page_count = source.page_count();
    if first == 0 || first > last || last > page_count {
        return Err(PdfError::PageRange {
            first,
            last,
            page_count,
        }
        .into());
    }

    let mut pages = Vec::with_capacity((last - first + 1) as usize);
    for page in first..=last {
        let images = source.extract_images(page)?;
        if images.is_empty() {
            debug!("no images found on page {}", page);
        } else {
            debug!("found {} images on page {}", images.len(), page);
        }

        let text = page_text(&images, ocr, config)?;
        pages.push(PageText { page, text });
    }

    Ok(pages)
}

/// Text contribution of one page's images under the configured policy.
fn page_text<O: OcrEngine>(
    images: &[DynamicImage],
    ocr: &O,
    config: &ReaderConfig,
) -> Result<String> {
    match config.image_policy {
        ImagePolicy::FirstImageOnly => match images.first() {
            Some(image) => Ok(text::normalize(&ocr.recognize(image)?)),
            None => Ok(String::new()),
        },
        ImagePolicy::AllImages => {
            let mut parts = Vec::with_capacity(images.len());
            for image in images {
                parts.push(text::normalize(&ocr.recognize(image)?));
            }
            Ok(parts.join(&config.image_separator))
        }
    }
}

/// Join page texts into the display buffer: page order, no separator.
pub fn concatenate(pages: &[PageText]) -> String {
    pages.iter().map(|p| p.text.as_str()).collect()
}
