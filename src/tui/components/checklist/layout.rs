//! Wrapping and caret geometry for checklist rows.
//!
//! Rows are wrapped into character ranges instead of owned strings so the
//! caret offset (a character index into the item) maps straight onto a
//! visual line and column. The ranges cover the text exactly, trailing
//! spaces included, which plain `textwrap::wrap` would trim.

use std::ops::Range;

use textwrap::WordSeparator;
use textwrap::core::{Word, break_words};
use textwrap::wrap_algorithms::wrap_first_fit;
use unicode_width::UnicodeWidthStr;

use crate::core::state::{byte_index, char_len};

/// Wrap `text` into lines of at most `width` columns.
///
/// Always returns at least one range; an empty item still occupies a line.
pub fn wrap_ranges(text: &str, width: u16) -> Vec<Range<usize>> {
    if text.is_empty() || width == 0 {
        return vec![0..char_len(text)];
    }

    let words: Vec<Word> = WordSeparator::AsciiSpace.find_words(text).collect();
    let words = break_words(words, width as usize);
    let lines = wrap_first_fit(&words, &[f64::from(width)]);

    let mut ranges = Vec::with_capacity(lines.len());
    let mut start = 0;
    for line in lines {
        let chars: usize = line
            .iter()
            .map(|w| char_len(w.word) + char_len(w.whitespace))
            .sum();
        ranges.push(start..start + chars);
        start += chars;
    }
    if ranges.is_empty() {
        ranges.push(0..0);
    }
    ranges
}

/// Borrow the characters in `range`.
pub fn slice_chars(text: &str, range: Range<usize>) -> &str {
    let start = byte_index(text, range.start);
    let end = byte_index(text, range.end).max(start);
    &text[start..end]
}

/// Visual (line, column) of the caret at character `offset`.
///
/// At a wrap boundary the caret belongs to the start of the next line.
pub fn caret_cell(text: &str, ranges: &[Range<usize>], offset: usize) -> (u16, u16) {
    let line = ranges
        .iter()
        .rposition(|r| r.start <= offset)
        .unwrap_or(0);
    let Some(range) = ranges.get(line) else {
        return (0, 0);
    };
    let end = offset.clamp(range.start, range.end);
    let column = slice_chars(text, range.start..end).width();
    (line as u16, column as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines<'a>(text: &'a str, ranges: &[Range<usize>]) -> Vec<&'a str> {
        ranges.iter().map(|r| slice_chars(text, r.clone())).collect()
    }

    #[test]
    fn test_empty_text_is_one_line() {
        assert_eq!(wrap_ranges("", 10), vec![0..0]);
    }

    #[test]
    fn test_short_text_fits() {
        assert_eq!(wrap_ranges("Buy milk", 20), vec![0..8]);
    }

    #[test]
    fn test_wraps_at_spaces_keeping_them() {
        let text = "Buy milk and eggs";
        let ranges = wrap_ranges(text, 9);
        assert_eq!(lines(text, &ranges), vec!["Buy milk ", "and eggs"]);
    }

    #[test]
    fn test_ranges_cover_text() {
        let text = "  leading and   inner    spaces that wrap around";
        let ranges = wrap_ranges(text, 7);
        assert_eq!(lines(text, &ranges).concat(), text);
        assert_eq!(ranges.last().map(|r| r.end), Some(char_len(text)));
    }

    #[test]
    fn test_long_word_is_broken() {
        let ranges = wrap_ranges("abcdefghij", 4);
        assert_eq!(ranges, vec![0..4, 4..8, 8..10]);
    }

    #[test]
    fn test_caret_cell() {
        let text = "Buy milk and eggs";
        let ranges = wrap_ranges(text, 9);
        assert_eq!(caret_cell(text, &ranges, 0), (0, 0));
        assert_eq!(caret_cell(text, &ranges, 4), (0, 4));
        assert_eq!(caret_cell(text, &ranges, 9), (1, 0));
        assert_eq!(caret_cell(text, &ranges, 17), (1, 8));
    }

    #[test]
    fn test_caret_cell_wide_chars() {
        let text = "日本語";
        let ranges = wrap_ranges(text, 20);
        assert_eq!(caret_cell(text, &ranges, 2), (0, 4));
    }
}
