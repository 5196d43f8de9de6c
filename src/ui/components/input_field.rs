//! Input Field Component
//!
//! A labelled text input with focus handling and inline error lines.
//!
//! The label sits on its own row above the box, or inside the top border
//! when vertical space is short.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use super::wrap::wrap_columns;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_FOCUS, COLOR_INPUT_BG};

/// Prefix rendered in front of every validation message
pub const ERROR_PREFIX: &str = "Error: ";

const CURSOR: char = '\u{2588}';
const ERROR_MARK: &str = "\u{2717} ";

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Optional error message to display below the input
    pub error: Option<String>,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
    /// Visible text rows inside the box
    pub rows: u16,
    /// Draw the label in the top border instead of on its own row
    pub label_in_border: bool,
}

impl<'a> InputFieldConfig<'a> {
    /// Create a single-row input with the label above the box
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            error: None,
            placeholder: None,
            rows: 1,
            label_in_border: false,
        }
    }

    /// Set whether the input is focused
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set the error message shown under the box
    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    /// Set placeholder text; an empty string means no placeholder.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = (!placeholder.is_empty()).then_some(placeholder);
        self
    }

    /// Set the number of text rows (at least 1)
    pub fn rows(mut self, rows: u16) -> Self {
        self.rows = rows.max(1);
        self
    }

    /// Set whether the label goes in the top border
    pub fn label_in_border(mut self, label_in_border: bool) -> Self {
        self.label_in_border = label_in_border;
        self
    }
}

/// Error text wrapped to `text_width`, one string per row.
fn error_rows(error: &str, text_width: u16) -> Vec<String> {
    wrap_columns(&format!("{ERROR_MARK}{ERROR_PREFIX}{error}"), text_width)
}

/// Rows needed for an input field rendered `width` columns wide:
/// label (1, unless in the border) + box (rows + 2 borders) + wrapped error
pub fn calculate_input_field_height(config: &InputFieldConfig, width: u16) -> u16 {
    let label = u16::from(!config.label_in_border);
    let error = config
        .error
        .as_deref()
        .map(|error| error_rows(error, width.saturating_sub(4)).len() as u16)
        .unwrap_or(0);
    label + config.rows + 2 + error
}

/// Keep the tail of `line` that fits in `width` columns.
fn tail_fitting(line: &str, width: usize) -> String {
    let mut used = 0;
    let mut start = line.len();
    for (idx, c) in line.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    line[start..].to_string()
}

/// The visible text lines of the box, scrolled so the end of the value
/// (where the cursor sits) is always shown.
fn visible_lines(value: &str, focused: bool, rows: u16, width: u16) -> Vec<String> {
    let mut lines: Vec<String> = value.split('\n').map(str::to_string).collect();
    if focused {
        if let Some(last) = lines.last_mut() {
            last.push(CURSOR);
        }
    }
    let skip = lines.len().saturating_sub(rows as usize);
    lines
        .into_iter()
        .skip(skip)
        .map(|line| tail_fitting(&line, width as usize))
        .collect()
}

/// Render an input field with label, input box, and optional error.
///
/// Everything is clipped to `area`. Returns the rect of the input box so the
/// caller can register it as a click target.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> Rect {
    let inner_x = area.x + 2;
    let inner_width = area.width.saturating_sub(4);
    let mut y = area.y;

    let label_style = if config.focused {
        Style::default().fg(COLOR_FOCUS)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let label = Span::styled(config.label, label_style);
    if !config.label_in_border {
        let label_area = Rect::new(inner_x, y, inner_width, 1).intersection(area);
        frame.render_widget(Paragraph::new(Line::from(label.clone())), label_area);
        y += 1;
    }

    let box_area = Rect::new(inner_x, y, inner_width, config.rows + 2).intersection(area);
    let border_color = if config.focused {
        COLOR_FOCUS
    } else {
        COLOR_BORDER
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));
    if config.label_in_border {
        block = block.title(label);
    }

    let text_width = inner_width.saturating_sub(2);
    let lines: Vec<Line> = match config.placeholder {
        Some(placeholder) if config.value.is_empty() && !config.focused => {
            vec![Line::from(Span::styled(
                tail_fitting(placeholder, text_width as usize),
                Style::default().fg(COLOR_DIM),
            ))]
        }
        _ => {
            let style = if config.focused {
                Style::default().fg(COLOR_FOCUS)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            visible_lines(config.value, config.focused, config.rows, text_width)
                .into_iter()
                .map(|line| Line::from(Span::styled(line, style)))
                .collect()
        }
    };
    frame.render_widget(Paragraph::new(lines).block(block), box_area);
    y += config.rows + 2;

    if let Some(error) = &config.error {
        let rows = error_rows(error, inner_width);
        let error_area = Rect::new(inner_x, y, inner_width, rows.len() as u16).intersection(area);
        let lines: Vec<Line> = rows
            .into_iter()
            .map(|row| Line::from(Span::styled(row, Style::default().fg(COLOR_ERROR))))
            .collect();
        frame.render_widget(Paragraph::new(lines), error_area);
    }

    box_area
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_field_config_builder() {
        let config = InputFieldConfig::new("Email*", "x")
            .focused(true)
            .error(Some("bad".to_string()))
            .placeholder("you@example.com")
            .rows(0);

        assert!(config.focused);
        assert_eq!(config.error.as_deref(), Some("bad"));
        assert_eq!(config.placeholder, Some("you@example.com"));
        assert_eq!(config.rows, 1);
    }

    #[test]
    fn test_empty_placeholder_is_none() {
        let config = InputFieldConfig::new("Message", "").placeholder("");
        assert!(config.placeholder.is_none());
    }

    #[test]
    fn test_calculate_height() {
        let config = InputFieldConfig::new("Label", "Value");
        assert_eq!(calculate_input_field_height(&config, 60), 4);
        let config = config.error(Some("Error message".to_string()));
        assert_eq!(calculate_input_field_height(&config, 60), 5);
        let config = InputFieldConfig::new("Message", "").rows(3);
        assert_eq!(calculate_input_field_height(&config, 60), 6);
    }

    #[test]
    fn test_label_in_border_saves_a_row() {
        let config = InputFieldConfig::new("Email*", "").label_in_border(true);
        assert_eq!(calculate_input_field_height(&config, 60), 3);
    }

    #[test]
    fn test_long_error_reserves_wrapped_rows() {
        // "✗ Error: " + 42 chars = 51 columns, 26 columns of text per row
        let error = "firstName must have at least 5 characters.".to_string();
        let config = InputFieldConfig::new("First Name*", "").error(Some(error));
        assert_eq!(calculate_input_field_height(&config, 30), 6);
        assert_eq!(calculate_input_field_height(&config, 70), 5);
    }

    #[test]
    fn test_render_label_in_border() {
        use ratatui::backend::TestBackend;
        use ratatui::Terminal;

        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        let config = InputFieldConfig::new("Email*", "a@b.co").label_in_border(true);
        let mut box_rect = Rect::default();
        terminal
            .draw(|frame| box_rect = render_input_field(frame, frame.area(), &config))
            .unwrap();
        assert_eq!(box_rect, Rect::new(2, 0, 26, 3));

        let buffer = terminal.backend().buffer();
        let top: String = (0..30).map(|x| buffer[(x, 0)].symbol()).collect();
        let middle: String = (0..30).map(|x| buffer[(x, 1)].symbol()).collect();
        assert!(top.contains("Email*"));
        assert!(middle.contains("a@b.co"));
    }

    #[test]
    fn test_tail_fitting_keeps_end() {
        assert_eq!(tail_fitting("abcdef", 3), "def");
        assert_eq!(tail_fitting("abc", 10), "abc");
        assert_eq!(tail_fitting("日本語", 4), "本語");
    }

    #[test]
    fn test_visible_lines_scroll_to_cursor() {
        let lines = visible_lines("one\ntwo\nthree", true, 2, 20);
        assert_eq!(lines, vec!["two".to_string(), format!("three{CURSOR}")]);
    }
}
