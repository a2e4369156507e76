//! Rune width classification.
//!
//! Every rune is classified as occupying either one (half-width) or two
//! (full-width) terminal cells. Classification delegates to `unicode-width`,
//! except for a fixed set of runes the library itself draws. Those are forced
//! to half-width so column arithmetic stays consistent even under ambiguous
//! East Asian width settings.

use unicode_width::UnicodeWidthChar;

/// The horizontal ellipsis drawn by the three-dot text overrun mode.
pub const ELLIPSIS_RUNE: char = '…';

/// The marker drawn when a widget's canvas is below its minimum size.
pub const RESIZE_MARKER_RUNE: char = '⇄';

/// Check if a rune belongs to the set the library forces to half-width:
/// the box-drawing block, the braille patterns block, the ellipsis and the
/// resize marker.
#[must_use]
pub const fn is_forced_half_width(rune: char) -> bool {
    matches!(rune, '\u{2500}'..='\u{257F}' | '\u{2800}'..='\u{28FF}')
        || rune == ELLIPSIS_RUNE
        || rune == RESIZE_MARKER_RUNE
}

/// Number of cells the rune occupies: 1 for half-width, 2 for full-width.
///
/// Runes with no defined width (control characters) count as one cell; they
/// are rejected before drawing anyway.
#[must_use]
pub fn rune_width(rune: char) -> i32 {
    if is_forced_half_width(rune) {
        return 1;
    }
    match UnicodeWidthChar::width(rune) {
        Some(2) => 2,
        _ => 1,
    }
}

/// Number of cells required to draw the whole string.
#[must_use]
pub fn text_width(text: &str) -> i32 {
    text.chars().map(rune_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_half_width() {
        assert_eq!(rune_width('a'), 1);
        assert_eq!(rune_width(' '), 1);
        assert_eq!(rune_width('~'), 1);
    }

    #[test]
    fn test_cjk_is_full_width() {
        assert_eq!(rune_width('世'), 2);
        assert_eq!(rune_width('界'), 2);
        assert_eq!(rune_width('日'), 2);
    }

    #[test]
    fn test_forced_half_width_set() {
        // Box drawing.
        assert!(is_forced_half_width('─'));
        assert!(is_forced_half_width('┼'));
        assert!(is_forced_half_width('╬'));
        // Braille.
        assert!(is_forced_half_width('\u{2800}'));
        assert!(is_forced_half_width('\u{28FF}'));
        // Internal markers.
        assert!(is_forced_half_width(ELLIPSIS_RUNE));
        assert!(is_forced_half_width(RESIZE_MARKER_RUNE));

        assert!(!is_forced_half_width('a'));
        assert!(!is_forced_half_width('世'));
    }

    #[test]
    fn test_forced_runes_report_one_cell() {
        assert_eq!(rune_width('┌'), 1);
        assert_eq!(rune_width('\u{28FF}'), 1);
        assert_eq!(rune_width(ELLIPSIS_RUNE), 1);
        assert_eq!(rune_width(RESIZE_MARKER_RUNE), 1);
    }

    #[test]
    fn test_text_width_mixed() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("abc"), 3);
        assert_eq!(text_width("a世b"), 4);
        assert_eq!(text_width("世界"), 4);
    }
}
