//! Button Component
//!
//! A single-row button rendered as `[ Label ]`.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{COLOR_BUTTON_FOCUS, COLOR_DIM, COLOR_FOCUS};

/// Width of the rendered button text, brackets included
pub fn button_width(label: &str) -> u16 {
    (label.width() + 4) as u16
}

/// The rect a button labelled `label` occupies when centered in `area`.
pub fn button_rect(area: Rect, label: &str) -> Rect {
    let width = button_width(label).min(area.width);
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y,
        width,
        area.height.min(1),
    )
}

/// Render a button centered in `area`.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    focused: bool,
    hover_style: Option<Style>,
) {
    let rect = button_rect(area, label);

    let mut style = if focused {
        Style::default()
            .fg(COLOR_FOCUS)
            .bg(COLOR_BUTTON_FOCUS)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    if let Some(hover) = hover_style {
        style = style.patch(hover);
    }

    let text = Paragraph::new(Line::from(Span::styled(format!("[ {label} ]"), style)))
        .alignment(Alignment::Left);
    frame.render_widget(text, rect);
}
