//! Cleans raw OCR output into readable text.
//!
//! Tesseract tends to emit list-marker glyphs, stray symbols and long runs of
//! blank lines. The cleaning pass removes those while keeping Latin and
//! Devanagari text intact.

use regex::Regex;
use std::sync::LazyLock;

static LIST_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{2022}\x{25AA}\x{25E6}\x{25CF}\x{2023}\x{2013}\x{2014}\-](\s)").unwrap()
});
static DISALLOWED_CHARACTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[^A-Za-z0-9_\s().,:;\-+=><\[\]{}/\\'"@#&%*!?|\n\x{0900}-\x{097F}]"#).unwrap()
});
static NEWLINE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());
static WHITESPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Normalizes raw recognized text.
///
/// The cleaning pass is repeated until it stops changing the text, which keeps
/// `normalize(normalize(x)) == normalize(x)` even when removing a noise glyph
/// leaves a list marker directly before whitespace.
pub fn normalize(raw_text: &str) -> String {
    let mut current = clean_once(raw_text);

    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_once(text: &str) -> String {
    let without_markers = LIST_MARKER_RE.replace_all(text, "$1");
    let allowed_only = DISALLOWED_CHARACTER_RE.replace_all(&without_markers, "");
    let single_newlines = NEWLINE_RUN_RE.replace_all(&allowed_only, "\n");
    let single_spaces = WHITESPACE_RUN_RE.replace_all(&single_newlines, " ");

    single_spaces.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_cleans_ocr_sample() {
        assert_eq!(normalize("Hello   World\n\n\nTest•"), "Hello World\nTest");
    }

    #[test]
    fn test_normalize_strips_list_markers_before_whitespace() {
        assert_eq!(normalize("• Name"), "Name");
        assert_eq!(normalize("Name\n▪ Address\n— Phone"), "Name Address Phone");
    }

    #[test]
    fn test_normalize_keeps_hyphen_inside_words() {
        assert_eq!(normalize("co-operate 12-05-1990"), "co-operate 12-05-1990");
    }

    #[test]
    fn test_normalize_keeps_allowed_punctuation() {
        let raw = r#"(a), b. c: d; e+f=g>h<i [j] {k} l/m\n 'o' "p" @q #r &s %t *u !v ?w |x _y"#;

        assert_eq!(normalize(raw), raw);
    }

    #[test]
    fn test_normalize_returns_empty_for_only_disallowed_characters() {
        assert_eq!(normalize("©®™€£¥§¶"), "");
        assert_eq!(normalize("••• \n\n ©"), "");
    }

    #[test]
    fn test_normalize_preserves_devanagari_next_to_punctuation() {
        assert_eq!(normalize("नमस्ते, दुनिया!"), "नमस्ते, दुनिया!");
        assert_eq!(normalize("(नमस्ते)"), "(नमस्ते)");
    }

    #[test]
    fn test_normalize_removes_non_ascii_latin_letters() {
        assert_eq!(normalize("café"), "caf");
    }

    #[test]
    fn test_normalize_collapses_mixed_whitespace_runs() {
        assert_eq!(normalize("  a\t\tb \n c  "), "a b c");
    }

    #[test]
    fn test_normalize_output_has_no_double_newlines_or_spaces() {
        let samples = [
            "a\n\n\n\nb",
            "a \n \n b",
            "x\r\n\r\ny",
            "•\n•\n•\nz",
            "  ◦ item one\n\n ◦ item two  ",
        ];

        for sample in samples {
            let cleaned = normalize(sample);
            assert!(!cleaned.contains("\n\n"), "{:?} -> {:?}", sample, cleaned);
            assert!(
                !cleaned
                    .chars()
                    .zip(cleaned.chars().skip(1))
                    .any(|(left, right)| left.is_whitespace() && right.is_whitespace()),
                "{:?} -> {:?}",
                sample,
                cleaned
            );
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "Hello   World\n\n\nTest•",
            "-© b",
            "— ‣ • list",
            "नाम: राम\n\n\nID #1234",
            "\u{00A0}spaced\u{2003}out\u{00A0}",
            "",
        ];

        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_normalize_removes_marker_exposed_by_noise_removal() {
        assert_eq!(normalize("-© b"), "b");
    }
}
