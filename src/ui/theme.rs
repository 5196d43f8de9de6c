//! Color theme constants for the contact form.

use ratatui::style::Color;

/// Border color for unfocused inputs and the form frame
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Focused input border and label
pub const COLOR_FOCUS: Color = Color::White;

/// Form title
pub const COLOR_HEADER: Color = Color::White;

/// Dim text: unfocused labels, placeholders, key hints
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Inline validation errors
pub const COLOR_ERROR: Color = Color::Red;

/// Submission summary accents - green #04B575
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Submit button when focused
pub const COLOR_BUTTON_FOCUS: Color = Color::Rgb(0, 122, 204); // blue #007ACC
