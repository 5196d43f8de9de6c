//! Terminal rendering for the contact form.
//!
//! Rendering is a pure function of [`ContactForm`](crate::form::ContactForm)
//! state plus the hit-area registry it fills in for mouse handling.

pub mod components;
mod form_view;
pub mod interaction;
pub mod layout;
pub mod theme;

pub use form_view::{render_contact_form, FORM_TITLE, SUBMIT_LABEL};
pub use layout::LayoutContext;

use ratatui::Frame;

use crate::app::App;

/// Render one frame of the application.
pub fn render(frame: &mut Frame, app: &mut App) {
    let (form, hit_areas) = app.render_parts();
    render_contact_form(frame, form, hit_areas);
}
