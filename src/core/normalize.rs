//! Plain-text normalization.
//!
//! Item text is plain characters only. Anything a host can smuggle in
//! (pasted ANSI styling, line breaks, tabs, other control characters) is
//! folded away here. Applying it twice gives the same result as once.

/// Reduce `text` to a single line of plain characters.
///
/// ANSI escape sequences are removed, line breaks and tabs become a single
/// space, and remaining control characters are dropped.
pub fn plain_text(text: &str) -> String {
    let spaced: String = text
        .replace("\r\n", "\n")
        .chars()
        .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
        .collect();
    strip_ansi_escapes::strip_str(spaced)
        .chars()
        .filter(|c| !c.is_control())
        .collect()
}

/// True when `plain_text` would leave `text` untouched.
pub fn is_plain(text: &str) -> bool {
    !text.chars().any(char::is_control)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Buy milk", "Buy milk")]
    #[case("\u{1b}[9mstruck\u{1b}[0m", "struck")]
    #[case("one\ntwo", "one two")]
    #[case("one\r\ntwo", "one two")]
    #[case("tab\there", "tab here")]
    #[case("bell\u{7}", "bell")]
    #[case("", "")]
    fn test_plain_text(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(plain_text(input), expected);
    }

    #[test]
    fn test_plain_text_idempotent() {
        let once = plain_text("\u{1b}[1;31mred\u{1b}[0m\tand\nmore");
        assert_eq!(plain_text(&once), once);
        assert!(is_plain(&once));
    }

    #[test]
    fn test_is_plain() {
        assert!(is_plain("héllo wörld"));
        assert!(!is_plain("a\nb"));
        assert!(!is_plain("\u{1b}[0m"));
    }
}
