//! Wrapping and boundary helpers for the query editor.
//!
//! Stateless; every function takes the text it works on.

/// Borders (2) + scrollbar column (1) consumed horizontally
pub(super) const HORIZONTAL_OVERHEAD: u16 = 3;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Visible query lines before the editor scrolls internally
pub(super) const MAX_VISIBLE_LINES: u16 = 8;
/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;

/// Textwrap options for the editor's inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Inner content width for a given outer width. 0 if the area is too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Rows the query occupies once wrapped. Every `\n` starts a row, so a
/// trailing newline leaves an empty row for the cursor.
pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }

    let options = wrap_options(width);
    text.split('\n')
        .map(|line| textwrap::wrap(line, &options).len().max(1) as u16)
        .sum()
}

pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .chars()
        .next_back()
        .map_or(0, |c| pos - c.len_utf8())
}

pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len(), |c| pos + c.len_utf8())
}

/// Identifier characters: `customer_id` is one word.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Start of the identifier before `pos`, skipping spaces and punctuation.
pub(super) fn prev_word_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .trim_end_matches(|c| !is_word_char(c))
        .trim_end_matches(is_word_char)
        .len()
}

/// End of the identifier after `pos`, skipping spaces and punctuation.
pub(super) fn next_word_boundary(text: &str, pos: usize) -> usize {
    let rest = text[pos..]
        .trim_start_matches(|c| !is_word_char(c))
        .trim_start_matches(is_word_char);
    text.len() - rest.len()
}
