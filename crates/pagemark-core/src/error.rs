//! Error types for the pagemark-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the pagemark library.
#[derive(Error, Debug)]
pub enum PagemarkError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Outline writing error.
    #[error("outline error: {0}")]
    Outline(#[from] OutlineError),

    /// No source PDF has been selected in the session.
    #[error("no PDF selected")]
    NoDocument,

    /// A read pass is already running.
    #[error("a read pass is already in progress")]
    ReadInFlight,
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),

    /// Requested page range falls outside the document.
    #[error("page range {first}-{last} outside document with {page_count} pages")]
    PageRange {
        first: u32,
        last: u32,
        page_count: u32,
    },
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The configured OCR binary does not exist.
    #[error("OCR engine not found at {}", .0.display())]
    EngineMissing(PathBuf),

    /// Failed to launch the OCR binary.
    #[error("failed to launch OCR engine: {0}")]
    Launch(String),

    /// The OCR binary reported a recognition failure.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Failed to stage the image for the OCR binary.
    #[error("failed to stage image: {0}")]
    Staging(String),
}

/// Errors related to outline writing.
#[derive(Error, Debug)]
pub enum OutlineError {
    /// Failed to open/parse the source PDF.
    #[error("failed to load PDF: {0}")]
    Load(String),

    /// The source PDF has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The configured target page does not exist in the document.
    #[error("outline target page {0} does not exist")]
    MissingTargetPage(u32),

    /// Failed to write the output document.
    #[error("failed to write outline PDF: {0}")]
    Write(String),
}

/// Result type for the pagemark library.
pub type Result<T> = std::result::Result<T, PagemarkError>;
