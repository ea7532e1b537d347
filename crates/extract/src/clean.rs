//! Pre-parse HTML cleanup for the legacy page family.
//!
//! The legacy pages are hand-authored, so the markup is full of formatting
//! whitespace that would otherwise leak into extracted text. Cleanup runs on
//! the raw HTML string before it is handed to the parser.

use crate::consts;

/// Private sentinel substituted for `<br>` markup before parsing.
///
/// The structural renderer treats it as ordinary text, which preserves the
/// break's position; [`restore_line_breaks`] turns it back into a real
/// newline as the very last rendering step. It must never appear in any
/// value returned from this crate.
pub(crate) const LINE_BREAK_MARKER: &str = "{#BR#}";

/// Cleans raw HTML for structural parsing.
///
/// Removes newlines and whitespace runs butting against tag delimiters,
/// deletes script and comment blocks entirely, and substitutes `<br>` tags
/// with [`LINE_BREAK_MARKER`]. Best-effort text transformation; there are no
/// error conditions.
pub fn clean_html(html: &str) -> String {
    let html = html.replace('\n', "");
    let html = consts::SPACE_BEFORE_TAG_REGEX.replace_all(&html, "<");
    let html = consts::SPACE_AFTER_TAG_REGEX.replace_all(&html, ">");
    let html = consts::SCRIPT_REGEX.replace_all(&html, "");
    let html = consts::COMMENT_REGEX.replace_all(&html, "");
    consts::LINE_BREAK_REGEX.replace_all(&html, LINE_BREAK_MARKER).into_owned()
}

/// Replaces every line-break sentinel with a real newline.
pub(crate) fn restore_line_breaks(text: &str) -> String {
    text.replace(LINE_BREAK_MARKER, "\n")
}

/// Deletes every line-break sentinel.
///
/// Used for single-line field values (location, date text) where a break
/// inside the value carries no meaning.
pub(crate) fn strip_line_breaks(text: &str) -> String {
    text.replace(LINE_BREAK_MARKER, "")
}
