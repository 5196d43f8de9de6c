//! Dialog Frame Component
//!
//! A centered frame with rounded borders and a title. Sizing follows the
//! terminal width and the frame never extends past the available area.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_HEADER};

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    /// Narrowest the frame gets while the terminal allows it
    pub min_width: u16,
    /// Widest the frame ever gets
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    /// Create a config with the default width bounds (40..=72 columns)
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 40,
            max_width: 72,
        }
    }

    /// Set the content height
    pub fn content_height(mut self, height: u16) -> Self {
        self.content_height = height;
        self
    }
}

/// Width of the frame for a terminal `area_width` columns wide.
///
/// Leaves a margin of 2 columns per side on small terminals and 4 otherwise,
/// and never exceeds the terminal.
pub fn calculate_dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig, area_width: u16) -> u16 {
    let width = if ctx.is_extra_small() || ctx.is_narrow() {
        area_width.saturating_sub(4).min(config.max_width)
    } else {
        area_width
            .saturating_sub(8)
            .clamp(config.min_width, config.max_width)
    };
    width.min(area_width)
}

/// Render the frame and return the inner content area.
///
/// The frame is centered horizontally and top-aligned when the content is
/// taller than `area`.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &DialogFrameConfig,
) -> Rect {
    let dialog_width = calculate_dialog_width(ctx, config, area.width);
    let dialog_height = calculate_total_dialog_height(config.content_height).min(area.height);

    let x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
    let y = area.y + (area.height.saturating_sub(dialog_height)) / 2;
    let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}

/// Total frame height for the given content height (adds borders)
pub fn calculate_total_dialog_height(content_height: u16) -> u16 {
    content_height.saturating_add(2)
}

// ============================================================================
// Tests
// ============================================================================
