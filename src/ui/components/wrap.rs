//! Hard wrapping by display columns.
//!
//! Components that reserve rows for their text wrap it here first, so the
//! rows they ask the layout for match the rows they draw.

use unicode_width::UnicodeWidthChar;

/// Split `text` into rows at most `width` columns wide, breaking mid-word.
///
/// Always returns at least one row. A character wider than `width` gets a
/// row to itself.
pub fn wrap_columns(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(c);
        used += w;
    }
    rows.push(current);
    rows
}
