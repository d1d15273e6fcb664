//! Hex color literals: the match pattern and short-form expansion.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// `#` followed by 3 to 6 hex digits, case-insensitive.
///
/// There is no word boundary: `#ffffff00` yields `#ffffff` and the
/// trailing `00` stays in the surrounding text.
pub(crate) static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)#[0-9a-f]{3,6}").expect("hex color pattern is valid"));

/// Expand a 3-digit short hex literal to its 6-digit form.
///
/// `#abc` becomes `#aabbcc`. Any input that is not exactly four
/// characters long is returned as-is, which includes the 4-digit
/// alpha form `#abcd`. Case is left untouched; lowercase before
/// calling if the result is used as a lookup key.
///
/// ```
/// use scss_color_vars::normalize_hex;
///
/// assert_eq!(normalize_hex("#abc"), "#aabbcc");
/// assert_eq!(normalize_hex("#abcdef"), "#abcdef");
/// ```
#[must_use]
pub fn normalize_hex(hex: &str) -> Cow<'_, str> {
    match hex.as_bytes() {
        &[b'#', r, g, b] if hex.is_ascii() => {
            let mut out = String::with_capacity(7);
            out.push('#');
            for digit in [r, g, b] {
                out.push(char::from(digit));
                out.push(char::from(digit));
            }
            Cow::Owned(out)
        }
        _ => Cow::Borrowed(hex),
    }
}

/// Lowercase and expand a literal into the form used as an index key.
pub(crate) fn lookup_key(literal: &str) -> String {
    normalize_hex(&literal.to_ascii_lowercase()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_short_form() {
        assert_eq!(normalize_hex("#abc"), "#aabbcc");
        assert_eq!(normalize_hex("#F0a"), "#FF00aa");
    }

    #[test]
    fn leaves_long_form_alone() {
        assert_eq!(normalize_hex("#abcdef"), "#abcdef");
        assert_eq!(normalize_hex("#abcde"), "#abcde");
    }

    // `#rgba` is not expanded, so it never matches a 6-digit entry.
    #[test]
    fn alpha_short_form_is_not_expanded() {
        assert_eq!(normalize_hex("#abcd"), "#abcd");
    }

    #[test]
    fn non_hex_four_chars_still_doubled() {
        // Length is the only test, mirroring how literals reach this function.
        assert_eq!(normalize_hex("#xyz"), "#xxyyzz");
    }

    #[test]
    fn multibyte_input_is_untouched() {
        assert_eq!(normalize_hex("#é"), "#é");
    }

    #[test]
    fn lookup_key_lowercases_then_expands() {
        assert_eq!(lookup_key("#FFF"), "#ffffff");
        assert_eq!(lookup_key("#FF0000"), "#ff0000");
    }

    #[test]
    fn pattern_is_greedy_without_boundary() {
        let found: Vec<&str> = HEX_COLOR
            .find_iter("#ffffff00 #AbC #12")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, ["#ffffff", "#AbC"]);
    }
}
