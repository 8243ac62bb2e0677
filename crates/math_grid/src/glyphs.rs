//! Compact glyph tables - Unicode sub/superscript substitution
//!
//! Maps single characters to their compact Unicode sub/superscript forms.
//! Translation is all-or-nothing: a partially compact rendering reads worse
//! than the full multi-line fallback, so one untranslatable character rejects
//! the whole run. The two tables are intentionally asymmetric (Unicode simply
//! has no subscript forms for most Latin letters); do not "complete" them.

// =============================================================================
// Character Tables
// =============================================================================

/// Compact subscript form of a character, if Unicode has one.
pub fn subscript_char(ch: char) -> Option<char> {
    match ch {
        '0' => Some('₀'),
        '1' => Some('₁'),
        '2' => Some('₂'),
        '3' => Some('₃'),
        '4' => Some('₄'),
        '5' => Some('₅'),
        '6' => Some('₆'),
        '7' => Some('₇'),
        '8' => Some('₈'),
        '9' => Some('₉'),
        'a' => Some('ₐ'),
        'e' => Some('ₑ'),
        'h' => Some('ₕ'),
        'i' => Some('ᵢ'),
        'k' => Some('ₖ'),
        'l' => Some('ₗ'),
        'm' => Some('ₘ'),
        'n' => Some('ₙ'),
        'o' => Some('ₒ'),
        'p' => Some('ₚ'),
        'r' => Some('ᵣ'),
        's' => Some('ₛ'),
        't' => Some('ₜ'),
        'u' => Some('ᵤ'),
        'v' => Some('ᵥ'),
        'x' => Some('ₓ'),
        'ə' => Some('ₔ'),
        '+' => Some('₊'),
        '-' => Some('₋'),
        '=' => Some('₌'),
        '(' => Some('₍'),
        ')' => Some('₎'),
        _ => None,
    }
}

/// Compact superscript form of a character, if Unicode has one.
pub fn superscript_char(ch: char) -> Option<char> {
    match ch {
        '0' => Some('⁰'),
        '1' => Some('¹'),
        '2' => Some('²'),
        '3' => Some('³'),
        '4' => Some('⁴'),
        '5' => Some('⁵'),
        '6' => Some('⁶'),
        '7' => Some('⁷'),
        '8' => Some('⁸'),
        '9' => Some('⁹'),
        'a' => Some('ᵃ'),
        'b' => Some('ᵇ'),
        'c' => Some('ᶜ'),
        'd' => Some('ᵈ'),
        'e' => Some('ᵉ'),
        'f' => Some('ᶠ'),
        'g' => Some('ᵍ'),
        'h' => Some('ʰ'),
        'i' => Some('ⁱ'),
        'j' => Some('ʲ'),
        'k' => Some('ᵏ'),
        'l' => Some('ˡ'),
        'm' => Some('ᵐ'),
        'n' => Some('ⁿ'),
        'o' => Some('ᵒ'),
        'p' => Some('ᵖ'),
        'r' => Some('ʳ'),
        's' => Some('ˢ'),
        't' => Some('ᵗ'),
        'u' => Some('ᵘ'),
        'v' => Some('ᵛ'),
        'w' => Some('ʷ'),
        'x' => Some('ˣ'),
        'y' => Some('ʸ'),
        'z' => Some('ᶻ'),
        'A' => Some('ᴬ'),
        'B' => Some('ᴮ'),
        'D' => Some('ᴰ'),
        'E' => Some('ᴱ'),
        'G' => Some('ᴳ'),
        'H' => Some('ᴴ'),
        'I' => Some('ᴵ'),
        'J' => Some('ᴶ'),
        'K' => Some('ᴷ'),
        'L' => Some('ᴸ'),
        'M' => Some('ᴹ'),
        'N' => Some('ᴺ'),
        'O' => Some('ᴼ'),
        'P' => Some('ᴾ'),
        'R' => Some('ᴿ'),
        'T' => Some('ᵀ'),
        'U' => Some('ᵁ'),
        'V' => Some('ⱽ'),
        'W' => Some('ᵂ'),
        '+' => Some('⁺'),
        '-' => Some('⁻'),
        '=' => Some('⁼'),
        '(' => Some('⁽'),
        ')' => Some('⁾'),
        _ => None,
    }
}

// =============================================================================
// Whole-run Translation
// =============================================================================

/// Translate a whole run to compact subscripts. Returns `None` when compact
/// glyphs are disabled, the run is empty, or any character lacks an entry.
pub fn try_subscript(text: &str, enabled: bool) -> Option<String> {
    if !enabled || text.is_empty() {
        return None;
    }
    text.chars().map(subscript_char).collect()
}

/// Translate a whole run to compact superscripts, same all-or-nothing rule.
///
/// A lone prime, double prime or asterisk is kept inline unchanged: those
/// read naturally at normal height and have no compact equivalents worth
/// using.
pub fn try_superscript(text: &str, enabled: bool) -> Option<String> {
    if !enabled || text.is_empty() {
        return None;
    }
    if matches!(text, "'" | "\"" | "*") {
        return Some(text.to_string());
    }
    text.chars().map(superscript_char).collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscript_digits() {
        assert_eq!(try_subscript("012", true).as_deref(), Some("₀₁₂"));
    }

    #[test]
    fn test_subscript_rejects_unmapped_letter() {
        // 'b' has no Unicode subscript form
        assert_eq!(try_subscript("ab", true), None);
    }

    #[test]
    fn test_subscript_disabled() {
        assert_eq!(try_subscript("0", false), None);
    }

    #[test]
    fn test_superscript_full_lowercase() {
        assert_eq!(try_superscript("xyz", true).as_deref(), Some("ˣʸᶻ"));
    }

    #[test]
    fn test_superscript_missing_uppercase() {
        // 'C' is absent from the superscript table
        assert_eq!(try_superscript("C", true), None);
        assert_eq!(try_superscript("T", true).as_deref(), Some("ᵀ"));
    }

    #[test]
    fn test_superscript_inline_marks() {
        assert_eq!(try_superscript("'", true).as_deref(), Some("'"));
        assert_eq!(try_superscript("\"", true).as_deref(), Some("\""));
        assert_eq!(try_superscript("*", true).as_deref(), Some("*"));
    }

    #[test]
    fn test_empty_run_is_not_translatable() {
        assert_eq!(try_subscript("", true), None);
        assert_eq!(try_superscript("", true), None);
    }

    #[test]
    fn test_signs_and_parens() {
        assert_eq!(try_subscript("(n+1)", true).as_deref(), Some("₍ₙ₊₁₎"));
        assert_eq!(try_superscript("(n-1)", true).as_deref(), Some("⁽ⁿ⁻¹⁾"));
    }
}
