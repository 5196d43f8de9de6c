//! Submission summary block.
//!
//! Shows the values of the last accepted submission, one `Label: value`
//! entry per field. The message entry is omitted when no message was sent.
//! Entries are hard-wrapped to the block width, so `summary_height` always
//! matches what `render_summary` draws.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::wrap::wrap_columns;
use crate::form::SubmittedValues;
use crate::ui::theme::{COLOR_FOCUS, COLOR_SUCCESS};

pub const SUMMARY_HEADING: &str = "You Submitted:";

/// Text columns available in a summary block `width` columns wide.
fn text_width(width: u16) -> u16 {
    width.saturating_sub(4)
}

/// Lines of the summary block, heading first, wrapped for a block `width`
/// columns wide.
pub fn summary_lines(submitted: &SubmittedValues, width: u16) -> Vec<Line<'static>> {
    let text_width = text_width(width);
    let heading = Style::default()
        .fg(COLOR_SUCCESS)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(COLOR_SUCCESS);
    let value_style = Style::default().fg(COLOR_FOCUS);

    let mut lines: Vec<Line<'static>> = wrap_columns(SUMMARY_HEADING, text_width)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, heading)))
        .collect();

    for (field, value) in submitted.summary_lines() {
        let prefix = format!("{}: ", field.summary_label());
        // multi-line messages are flattened onto one entry
        let entry = format!("{prefix}{}", value.replace('\n', " "));

        for (i, row) in wrap_columns(&entry, text_width).into_iter().enumerate() {
            let line = if i > 0 {
                Line::from(Span::styled(row, value_style))
            } else if let Some(rest) = row.strip_prefix(prefix.as_str()) {
                Line::from(vec![
                    Span::styled(prefix.clone(), label_style),
                    Span::styled(rest.to_string(), value_style),
                ])
            } else {
                // narrower than the label itself
                Line::from(Span::styled(row.clone(), label_style))
            };
            lines.push(line);
        }
    }
    lines
}

/// Rows the summary needs in a block `width` columns wide.
pub fn summary_height(submitted: &SubmittedValues, width: u16) -> u16 {
    summary_lines(submitted, width).len() as u16
}

pub fn render_summary(frame: &mut Frame, area: Rect, submitted: &SubmittedValues) {
    let inner = Rect::new(area.x + 2, area.y, text_width(area.width), area.height);
    let paragraph = Paragraph::new(summary_lines(submitted, area.width));
    frame.render_widget(paragraph, inner.intersection(area));
}
