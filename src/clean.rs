//! Cell text normalization.
//!
//! The dataset was scraped from a map listing, so cells carry a few kinds of
//! noise that are removed here:
//!
//! - Middle-dot separators (`·`) around values, or on their own.
//! - Multi-line cells where label lines precede the actual value. The **last**
//!   non-empty line is kept.
//! - Lone icon-font glyphs from the Unicode Private-Use Area, which render as
//!   placeholders rather than data.
//!
//! URL fields never go through [`clean`]; use [`url`] for those so links are
//! not bullet-stripped or line-collapsed.

const SEPARATOR: char = '·';

/// Code points above this are treated as private-use placeholder glyphs.
const PRIVATE_USE_FLOOR: u32 = 0xE000;

/// Normalize a raw text cell.
///
/// - `""`, `"   "`, `"·"` → `""`
/// - `"Label\n實際值"` → `"實際值"`
/// - `" · 4.5 · "` → `"4.5"`
/// - `"\u{E100}"` → `""`
pub fn clean(raw: &str) -> String {
    let value = raw.trim();
    if value.is_empty() || value == "·" {
        return String::new();
    }

    let Some(last) = value
        .split(is_line_break)
        .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == SEPARATOR))
        .rev()
        .find(|line| !line.is_empty())
    else {
        return String::new();
    };

    if is_placeholder_glyph(last) {
        return String::new();
    }
    last.to_string()
}

/// Trimmed raw text for URL-bearing cells.
pub fn url(raw: &str) -> String {
    raw.trim().to_string()
}

/// Strip `(` and `)` from both ends: `"(128)"` → `"128"`.
pub fn strip_parens(value: &str) -> &str {
    value.trim_matches(|c| c == '(' || c == ')')
}

/// Line boundaries, including a lone `\r` and the Unicode separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{1C}' | '\u{1D}' | '\u{1E}' | '\u{85}'
            | '\u{2028}' | '\u{2029}'
    )
}

fn is_placeholder_glyph(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => u32::from(c) > PRIVATE_USE_FLOOR,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_separator_only_yield_empty() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   "), "");
        assert_eq!(clean("·"), "");
        assert_eq!(clean("  ·  \n ·  "), "");
    }

    #[test]
    fn last_non_empty_line_wins() {
        assert_eq!(clean("Label\n實際值"), "實際值");
        assert_eq!(clean("first\nsecond\n\n  "), "second");
    }

    #[test]
    fn separators_trimmed_from_each_line() {
        assert_eq!(clean(" · 4.5 · "), "4.5");
        assert_eq!(clean("咖啡廳 ·\n · 營業中"), "營業中");
    }

    #[test]
    fn inner_separator_preserved() {
        assert_eq!(clean("內用 · 外帶"), "內用 · 外帶");
    }

    #[test]
    fn crlf_lines_handled() {
        assert_eq!(clean("Label\r\nValue"), "Value");
    }

    #[test]
    fn lone_carriage_return_splits_lines() {
        assert_eq!(clean("Label\rValue"), "Value");
        assert_eq!(clean("Label\u{2028}Value"), "Value");
    }

    #[test]
    fn unicode_whitespace_trimmed_from_each_line() {
        assert_eq!(clean("Value\n\t·"), "Value");
        assert_eq!(clean("Label\n\u{3000}Value"), "Value");
        assert_eq!(clean("Label\n\u{3000}·\u{00A0}"), "Label");
    }

    #[test]
    fn private_use_glyph_suppressed() {
        assert_eq!(clean("\u{E100}"), "");
        assert_eq!(clean("Label\n\u{F8FF}"), "");
    }

    #[test]
    fn ordinary_single_char_kept() {
        assert_eq!(clean("A"), "A");
        assert_eq!(clean("$"), "$");
        assert_eq!(clean("麵"), "麵");
    }

    #[test]
    fn private_use_glyph_inside_text_kept() {
        assert_eq!(clean("\u{E100}x"), "\u{E100}x");
    }

    #[test]
    fn url_only_trims() {
        assert_eq!(
            url("  https://example.com/a·b\n "),
            "https://example.com/a·b"
        );
    }

    #[test]
    fn strip_parens_both_ends() {
        assert_eq!(strip_parens("(128)"), "128");
        assert_eq!(strip_parens("128"), "128");
        assert_eq!(strip_parens("((1,024))"), "1,024");
        assert_eq!(strip_parens(""), "");
    }
}
