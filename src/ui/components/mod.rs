//! Reusable UI Components
//!
//! - `InputField` - labelled text input with focus handling and inline errors
//! - `Button` - single-row `[ Label ]` button
//! - `DialogFrame` - centered frame with rounded borders
//! - `Summary` - submitted values block
//! - `wrap` - hard wrapping by display columns

mod button;
mod dialog_frame;
mod input_field;
mod summary;
mod wrap;

pub use button::{button_rect, button_width, render_button};
pub use dialog_frame::{
    calculate_dialog_width, calculate_total_dialog_height, render_dialog_frame, DialogFrameConfig,
};
pub use input_field::{
    calculate_input_field_height, render_input_field, InputFieldConfig, ERROR_PREFIX,
};
pub use summary::{render_summary, summary_height, summary_lines, SUMMARY_HEADING};
