//! Embedded image extraction using lopdf.

use std::path::Path;

use image::{DynamicImage, ImageBuffer, Rgba};
use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::{debug, trace};

use super::{PageImageSource, Result};
use crate::error::PdfError;

/// Embedded-image extractor over a parsed PDF document.
pub struct PdfExtractor {
    document: Option<Document>,
}

impl PdfExtractor {
    /// Create a new extractor with no document loaded.
    pub fn new() -> Self {
        Self { document: None }
    }

    /// Parse a PDF from memory.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("decrypted PDF with empty password");
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    /// Read and parse a PDF file.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let data = std::fs::read(path)
            .map_err(|e| PdfError::Parse(format!("{}: {}", path.display(), e)))?;
        self.load(&data)
    }

    fn document(&self) -> Result<&Document> {
        self.document
            .as_ref()
            .ok_or(PdfError::Parse("no document loaded".to_string()))
    }

    /// Resources dictionary for a page, walking up the page tree for
    /// inherited entries.
    fn page_resources(&self, doc: &Document, page_id: ObjectId) -> Option<Dictionary> {
        let mut node_id = page_id;
        loop {
            let Object::Dictionary(dict) = doc.get_object(node_id).ok()? else {
                return None;
            };

            if let Ok(resources) = dict.get(b"Resources") {
                if let Ok((_, Object::Dictionary(res))) = doc.dereference(resources) {
                    return Some(res.clone());
                }
            }

            match dict.get(b"Parent") {
                Ok(Object::Reference(parent_id)) => node_id = *parent_id,
                _ => return None,
            }
        }
    }

    /// Decode an image XObject stream, if this object is one.
    fn image_from_object(&self, doc: &Document, obj: &Object) -> Option<DynamicImage> {
        let Object::Stream(stream) = obj else {
            return None;
        };
        let dict = &stream.dict;

        if dict.get(b"Subtype").ok()?.as_name().ok()? != b"Image" {
            return None;
        }

        let width = dict.get(b"Width").ok()?.as_i64().ok()? as u32;
        let height = dict.get(b"Height").ok()?.as_i64().ok()? as u32;

        trace!("image XObject: {}x{}", width, height);

        let filter_name = dict.get(b"Filter").ok().and_then(|filter| match filter {
            Object::Name(name) => Some(name.as_slice()),
            Object::Array(arr) => arr.first().and_then(|o| o.as_name().ok()),
            _ => None,
        });

        match filter_name {
            Some(b"DCTDecode") => {
                // JPEG streams decode directly from the raw content
                return image::load_from_memory_with_format(
                    &stream.content,
                    image::ImageFormat::Jpeg,
                )
                .ok();
            }
            Some(b"JPXDecode") | Some(b"CCITTFaxDecode") | Some(b"JBIG2Decode") => {
                trace!("unsupported image filter, skipping");
                return None;
            }
            _ => {}
        }

        let data = match stream.decompressed_content() {
            Ok(d) => d,
            Err(_) => stream.content.clone(),
        };

        let color_space = dict
            .get(b"ColorSpace")
            .ok()
            .and_then(|o| match o {
                Object::Name(name) => Some(name.as_slice()),
                Object::Array(arr) => arr.first().and_then(|o| o.as_name().ok()),
                Object::Reference(r) => doc.get_object(*r).ok().and_then(|o| o.as_name().ok()),
                _ => None,
            })
            .unwrap_or(b"DeviceRGB");

        let bits = dict
            .get(b"BitsPerComponent")
            .ok()
            .and_then(|o| o.as_i64().ok())
            .unwrap_or(8) as u8;

        raw_to_image(&data, width, height, color_space, bits)
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageImageSource for PdfExtractor {
    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_images(&self, page: u32) -> Result<Vec<DynamicImage>> {
        let doc = self.document()?;

        let pages = doc.get_pages();
        let page_id = pages.get(&page).ok_or(PdfError::InvalidPage(page))?;

        let mut images = Vec::new();

        if let Some(resources) = self.page_resources(doc, *page_id) {
            if let Ok(xobjects) = resources.get(b"XObject") {
                if let Ok((_, Object::Dictionary(xobj_dict))) = doc.dereference(xobjects) {
                    for (_name, obj_ref) in xobj_dict.iter() {
                        if let Ok((_, obj)) = doc.dereference(obj_ref) {
                            if let Some(img) = self.image_from_object(doc, obj) {
                                images.push(img);
                            }
                        }
                    }
                }
            }
        }

        debug!("extracted {} images from page {}", images.len(), page);
        Ok(images)
    }
}

/// Build an image from raw 8-bit RGB or grayscale samples.
fn raw_to_image(
    data: &[u8],
    width: u32,
    height: u32,
    color_space: &[u8],
    bits_per_component: u8,
) -> Option<DynamicImage> {
    if bits_per_component != 8 {
        trace!("unsupported bits per component: {}", bits_per_component);
        return None;
    }

    match color_space {
        b"DeviceRGB" | b"RGB" => {
            let expected = (width * height * 3) as usize;
            if data.len() < expected {
                return None;
            }
            let mut rgba = Vec::with_capacity((width * height * 4) as usize);
            for px in data[..expected].chunks_exact(3) {
                rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
            }
            ImageBuffer::<Rgba<u8>, _>::from_raw(width, height, rgba).map(DynamicImage::ImageRgba8)
        }
        b"DeviceGray" | b"G" => {
            let expected = (width * height) as usize;
            if data.len() < expected {
                return None;
            }
            let mut rgba = Vec::with_capacity((width * height * 4) as usize);
            for &gray in &data[..expected] {
                rgba.extend_from_slice(&[gray, gray, gray, 255]);
            }
            ImageBuffer::<Rgba<u8>, _>::from_raw(width, height, rgba).map(DynamicImage::ImageRgba8)
        }
        _ => {
            trace!(
                "unsupported color space: {}",
                String::from_utf8_lossy(color_space)
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;

    fn pdf_with_pages(count: usize) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let kids: Vec<Object> = (0..count)
            .map(|_| {
                doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                })
                .into()
            })
            .collect();

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count as i64,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut data = Vec::new();
        doc.save_to(&mut data).unwrap();
        data
    }

    #[test]
    fn test_extractor_without_document() {
        let extractor = PdfExtractor::new();
        assert_eq!(extractor.page_count(), 0);
        assert!(extractor.extract_images(1).is_err());
    }

    #[test]
    fn test_page_without_images_is_empty() {
        let mut extractor = PdfExtractor::new();
        extractor.load(&pdf_with_pages(2)).unwrap();

        assert_eq!(extractor.page_count(), 2);
        assert!(extractor.extract_images(1).unwrap().is_empty());
        assert!(extractor.extract_images(2).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_page_is_rejected() {
        let mut extractor = PdfExtractor::new();
        extractor.load(&pdf_with_pages(1)).unwrap();

        assert!(matches!(
            extractor.extract_images(2),
            Err(PdfError::InvalidPage(2))
        ));
    }

    #[test]
    fn test_raw_rgb_decode() {
        // 2x1 RGB: red then green
        let data = [255u8, 0, 0, 0, 255, 0];
        let img = raw_to_image(&data, 2, 1, b"DeviceRGB", 8).unwrap();
        let rgba = img.to_rgba8();
        assert_eq!(rgba.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(rgba.get_pixel(1, 0).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_raw_decode_rejects_short_data() {
        assert!(raw_to_image(&[1, 2], 2, 2, b"DeviceRGB", 8).is_none());
        assert!(raw_to_image(&[1, 2, 3], 1, 1, b"DeviceRGB", 4).is_none());
    }
}
