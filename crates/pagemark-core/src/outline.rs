//! Outline (bookmark) writing into a copy of the source PDF.

use std::path::{Path, PathBuf};

use lopdf::{Dictionary, Document, Object, ObjectId, StringFormat};
use tracing::{debug, info};

use crate::config::OutlineConfig;
use crate::error::OutlineError;

/// Result type for outline operations.
pub type Result<T> = std::result::Result<T, OutlineError>;

/// Suffix appended to the source file name (minus any `.pdf` extension).
pub const OUTPUT_SUFFIX: &str = ".outline.pdf";

/// Derive the output path: `<input without ".pdf" suffix>.outline.pdf`,
/// alongside the source.
pub fn output_path(input: &Path) -> PathBuf {
    let raw = input.to_string_lossy();
    let stem = raw.strip_suffix(".pdf").unwrap_or(&raw);
    PathBuf::from(format!("{stem}{OUTPUT_SUFFIX}"))
}

/// Split the display buffer into outline titles.
///
/// Lines split on LF; a single trailing empty line (editor convention) is
/// dropped, and lines blank after trimming are skipped. Titles are the
/// trimmed line text.
pub fn outline_titles(buffer: &str) -> Vec<String> {
    let mut lines: Vec<&str> = buffer.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }

    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Copy the source PDF and attach one outline entry per non-blank buffer
/// line, every entry pointing at the configured target page.
///
/// Returns the path of the written document.
pub fn write_outline(input: &Path, buffer: &str, config: &OutlineConfig) -> Result<PathBuf> {
    let mut doc = Document::load(input).map_err(|e| OutlineError::Load(e.to_string()))?;

    let pages = doc.get_pages();
    if pages.is_empty() {
        return Err(OutlineError::NoPages);
    }

    let target_page = *pages
        .get(&config.target_page)
        .ok_or(OutlineError::MissingTargetPage(config.target_page))?;

    let titles = outline_titles(buffer);
    debug!(
        "writing {} outline entries targeting page {}",
        titles.len(),
        config.target_page
    );

    attach_outline(&mut doc, &titles, target_page)?;

    let output = output_path(input);
    doc.save(&output)
        .map_err(|e| OutlineError::Write(e.to_string()))?;

    info!("wrote outline PDF to {}", output.display());
    Ok(output)
}

/// Build a flat outline tree and hang it off the document catalog.
fn attach_outline(doc: &mut Document, titles: &[String], page: ObjectId) -> Result<()> {
    if titles.is_empty() {
        return Ok(());
    }

    let outlines_id = doc.new_object_id();
    let item_ids: Vec<ObjectId> = titles.iter().map(|_| doc.new_object_id()).collect();

    for (i, title) in titles.iter().enumerate() {
        let mut item = Dictionary::new();
        item.set("Title", text_string(title));
        item.set("Parent", Object::Reference(outlines_id));
        item.set(
            "Dest",
            Object::Array(vec![
                Object::Reference(page),
                Object::Name(b"XYZ".to_vec()),
                Object::Null,
                Object::Null,
                Object::Null,
            ]),
        );
        if i > 0 {
            item.set("Prev", Object::Reference(item_ids[i - 1]));
        }
        if i + 1 < item_ids.len() {
            item.set("Next", Object::Reference(item_ids[i + 1]));
        }
        doc.objects.insert(item_ids[i], Object::Dictionary(item));
    }

    let mut outlines = Dictionary::new();
    outlines.set("Type", Object::Name(b"Outlines".to_vec()));
    outlines.set("First", Object::Reference(item_ids[0]));
    outlines.set("Last", Object::Reference(*item_ids.last().unwrap()));
    outlines.set("Count", Object::Integer(item_ids.len() as i64));
    doc.objects.insert(outlines_id, Object::Dictionary(outlines));

    let catalog_id = match doc.trailer.get(b"Root") {
        Ok(Object::Reference(id)) => *id,
        _ => return Err(OutlineError::Write("document has no catalog".to_string())),
    };
    match doc.get_object_mut(catalog_id) {
        Ok(Object::Dictionary(catalog)) => {
            catalog.set("Outlines", Object::Reference(outlines_id));
            Ok(())
        }
        _ => Err(OutlineError::Write("document has no catalog".to_string())),
    }
}

/// Encode a title as a PDF text string.
///
/// ASCII titles stay literal; anything else uses UTF-16BE with a BOM.
fn text_string(s: &str) -> Object {
    if s.is_ascii() {
        return Object::string_literal(s);
    }

    let mut bytes = vec![0xFE, 0xFF];
    for unit in s.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}
