//! OCR engine wrapper spawning an external Tesseract binary.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use image::DynamicImage;
use tracing::{debug, info};

use crate::config::OcrConfig;
use crate::error::OcrError;

use super::{OcrEngine, Result};

/// OCR engine backed by a Tesseract executable on the local filesystem.
pub struct TesseractEngine {
    binary: PathBuf,
    language: String,
}

impl TesseractEngine {
    /// Create an engine from configuration.
    ///
    /// An absolute engine path that does not exist fails here rather than on
    /// the first recognition call.
    pub fn from_config(config: &OcrConfig) -> Result<Self> {
        Self::new(&config.engine_path, config.language_spec())
    }

    /// Create an engine from an explicit binary path and language spec.
    pub fn new(binary: &Path, language: String) -> Result<Self> {
        if binary.is_absolute() && !binary.exists() {
            return Err(OcrError::EngineMissing(binary.to_path_buf()));
        }

        debug!("using OCR engine at {}", binary.display());

        Ok(Self {
            binary: binary.to_path_buf(),
            language,
        })
    }

    /// Language specifier handed to the engine, e.g. `eng+kor`.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// First line of the engine's `--version` output, for diagnostics.
    pub fn version(&self) -> Result<String> {
        let output = Command::new(&self.binary)
            .arg("--version")
            .output()
            .map_err(|e| launch_error(&self.binary, e))?;

        // Tesseract historically printed the version banner to stderr
        let text = if output.stdout.is_empty() {
            String::from_utf8_lossy(&output.stderr).into_owned()
        } else {
            String::from_utf8_lossy(&output.stdout).into_owned()
        };

        Ok(text.lines().next().unwrap_or_default().to_string())
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize(&self, image: &DynamicImage) -> Result<String> {
        let start = Instant::now();

        // The engine reads from a file, so stage the image as a PNG
        let staged = tempfile::Builder::new()
            .prefix("pagemark-ocr-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| OcrError::Staging(e.to_string()))?;

        image
            .save(staged.path())
            .map_err(|e| OcrError::Staging(e.to_string()))?;

        let output = Command::new(&self.binary)
            .arg(staged.path())
            .arg("stdout")
            .args(["-l", &self.language])
            .output()
            .map_err(|e| launch_error(&self.binary, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Recognition(stderr.trim().to_string()));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();

        info!(
            "recognized {} bytes of text in {}ms",
            text.len(),
            start.elapsed().as_millis()
        );

        Ok(text)
    }
}

fn launch_error(binary: &Path, err: std::io::Error) -> OcrError {
    if err.kind() == std::io::ErrorKind::NotFound {
        OcrError::EngineMissing(binary.to_path_buf())
    } else {
        OcrError::Launch(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_absolute_engine_fails_at_construction() {
        let path = Path::new("/definitely/not/a/real/tesseract");
        let result = TesseractEngine::new(path, "eng".to_string());
        assert!(matches!(result, Err(OcrError::EngineMissing(_))));
    }

    #[test]
    fn test_relative_engine_defers_to_spawn() {
        let engine = TesseractEngine::new(Path::new("no-such-engine"), "eng".to_string()).unwrap();
        assert_eq!(engine.language(), "eng");

        let missing = engine.recognize(&DynamicImage::new_luma8(1, 1));
        assert!(matches!(
            missing,
            Err(OcrError::EngineMissing(_)) | Err(OcrError::Launch(_))
        ));
    }

    #[test]
    fn test_language_spec_from_config() {
        let config = OcrConfig {
            engine_path: PathBuf::from("tesseract"),
            languages: vec!["eng".to_string(), "kor".to_string()],
        };
        let engine = TesseractEngine::from_config(&config).unwrap();
        assert_eq!(engine.language(), "eng+kor");
    }
}
