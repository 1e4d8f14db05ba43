//! Cleanup of raw OCR output.

/// Normalize raw OCR text for the display buffer.
///
/// Trims surrounding whitespace, unifies CRLF line endings to LF, collapses
/// doubled line feeds, and strips every space character, word-internal ones
/// included.
///
/// The blank-line collapse is a single non-recursive pass: three consecutive
/// line feeds reduce to two, not one.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .replace("\r\n", "\n")
        .replace("\n\n", "\n")
        .replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_has_no_spaces_or_crlf() {
        let samples = [
            "  plain text  ",
            "a b c\r\nd e f",
            "한 글\r\n\r\n테 스 트",
            " \r\n mixed \r\n endings \r\n ",
        ];
        for sample in samples {
            let cleaned = normalize(sample);
            assert!(!cleaned.contains(' '), "spaces left in {:?}", cleaned);
            assert!(!cleaned.contains("\r\n"), "CRLF left in {:?}", cleaned);
        }
    }

    #[test]
    fn test_trim_crlf_and_blank_collapse() {
        assert_eq!(normalize("  Hello\r\n\r\nWorld  "), "Hello\nWorld");
    }

    #[test]
    fn test_intraword_spaces_are_stripped() {
        assert_eq!(normalize("o c r o u t p u t"), "ocroutput");
    }

    #[test]
    fn test_blank_collapse_is_single_pass() {
        // Three line feeds collapse to two, not one
        assert_eq!(normalize("a\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_idempotent_on_clean_input() {
        let clean = normalize("Hello\nWorld");
        assert_eq!(normalize(&clean), clean);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \r\n  "), "");
    }
}
