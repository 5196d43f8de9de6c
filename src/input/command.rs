//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effect on the
//! form.

/// Everything a key press can ask the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    /// Quit the application (Esc, Ctrl+C)
    Quit,
    /// Submit from anywhere (Ctrl+S)
    Submit,
    /// Clear the whole form (Ctrl+R)
    Reset,

    // =========================================================================
    // Focus
    // =========================================================================
    /// Tab / Down
    FocusNext,
    /// Shift+Tab / Up
    FocusPrev,

    // =========================================================================
    // Editing
    // =========================================================================
    InsertChar(char),
    /// Enter inside the message field
    InsertNewline,
    Backspace,
    /// Ctrl+U
    ClearField,
    /// Enter on a single-line field or the Submit button
    Activate,
}
