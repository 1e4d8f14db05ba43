//! Configuration structures for the pagemark pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the pagemark pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagemarkConfig {
    /// OCR configuration.
    pub ocr: OcrConfig,

    /// Page-range reader configuration.
    pub reader: ReaderConfig,

    /// Outline writer configuration.
    pub outline: OutlineConfig,
}

impl Default for PagemarkConfig {
    fn default() -> Self {
        Self {
            ocr: OcrConfig::default(),
            reader: ReaderConfig::default(),
            outline: OutlineConfig::default(),
        }
    }
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Path to the Tesseract executable.
    ///
    /// Relative paths are resolved through `PATH` at spawn time; an absolute
    /// path must exist or engine construction fails.
    pub engine_path: PathBuf,

    /// Recognition languages, combined into one multi-script pass.
    pub languages: Vec<String>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            engine_path: default_engine_path(),
            languages: vec!["eng".to_string(), "kor".to_string()],
        }
    }
}

impl OcrConfig {
    /// Language specifier handed to the engine, e.g. `eng+kor`.
    pub fn language_spec(&self) -> String {
        self.languages.join("+")
    }
}

/// Default install location of the Tesseract binary.
fn default_engine_path() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\Program Files\Tesseract-OCR\tesseract.exe")
    } else {
        PathBuf::from("tesseract")
    }
}

/// Which embedded images on a page contribute text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImagePolicy {
    /// Only the first image found on each page.
    FirstImageOnly,

    /// Every image on the page, joined with the configured separator.
    AllImages,
}

/// Page-range reader configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Image selection policy per page.
    pub image_policy: ImagePolicy,

    /// Separator between per-image texts under [`ImagePolicy::AllImages`].
    pub image_separator: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            image_policy: ImagePolicy::FirstImageOnly,
            image_separator: "\n".to_string(),
        }
    }
}

/// Outline writer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Destination page for every outline entry (1-indexed).
    pub target_page: u32,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self { target_page: 1 }
    }
}

impl PagemarkConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_language_spec() {
        let config = OcrConfig::default();
        assert_eq!(config.language_spec(), "eng+kor");
    }

    #[test]
    fn test_default_reader_policy() {
        let config = ReaderConfig::default();
        assert_eq!(config.image_policy, ImagePolicy::FirstImageOnly);
        assert_eq!(config.image_separator, "\n");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: PagemarkConfig =
            serde_json::from_str(r#"{"outline": {"target_page": 3}}"#).unwrap();
        assert_eq!(config.outline.target_page, 3);
        assert_eq!(config.ocr.language_spec(), "eng+kor");
    }

    #[test]
    fn test_config_json_round_trip() {
        let mut config = PagemarkConfig::default();
        config.reader.image_policy = ImagePolicy::AllImages;
        config.ocr.languages = vec!["deu".to_string()];

        let json = serde_json::to_string(&config).unwrap();
        let back: PagemarkConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.reader.image_policy, ImagePolicy::AllImages);
        assert_eq!(back.ocr.language_spec(), "deu");
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = PagemarkConfig::default();
        config.outline.target_page = 2;
        config.save(&path).unwrap();

        let back = PagemarkConfig::from_file(&path).unwrap();
        assert_eq!(back.outline.target_page, 2);
    }
}
