//! Contact form screen.
//!
//! Lays out the inputs, Submit button, summary block and key hints inside a
//! centered frame titled "Contact Form", and registers click targets for the
//! inputs and the button.
//!
//! The roomy layout puts labels above their boxes and pads with spacer rows.
//! When that does not fit the terminal, the compact layout moves labels into
//! the box borders, shrinks the message box to one row and drops the spacers
//! and key hints. If even that is too tall the form scrolls so the summary
//! (after an accepted submit) or the focused element stays on screen.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::components::{
    button_rect, calculate_dialog_width, calculate_input_field_height, render_button,
    render_dialog_frame, render_input_field, render_summary, summary_height, DialogFrameConfig,
    InputFieldConfig,
};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use super::theme::COLOR_DIM;
use crate::form::{ContactForm, Field, Focus, FormPhase};

pub const FORM_TITLE: &str = "Contact Form";
pub const SUBMIT_LABEL: &str = "Submit";

const SCROLL_UP: &str = "\u{25b2}";
const SCROLL_DOWN: &str = "\u{25bc}";

/// How much vertical space the form spends on each element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Density {
    /// Labels above boxes, 3-row message box, spacers and key hints
    Comfortable,
    /// Labels in box borders, 1-row message box, no spacers or hints
    Compact,
}

impl Density {
    fn message_rows(self) -> u16 {
        match self {
            Density::Comfortable => 3,
            Density::Compact => 1,
        }
    }
}

/// One vertical slice of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Spacer,
    Input(Field),
    Button,
    Summary,
    Hints,
}

fn field_config(form: &ContactForm, field: Field, density: Density) -> InputFieldConfig<'_> {
    let rows = if field.is_multiline() {
        density.message_rows()
    } else {
        1
    };
    InputFieldConfig::new(field.label(), form.value(field))
        .focused(form.focus_target() == Focus::Field(field))
        .error(form.error(field).map(|e| e.to_string()))
        .placeholder(field.placeholder())
        .rows(rows)
        .label_in_border(density == Density::Compact)
}

/// Sections top to bottom with their heights, for content `width` wide.
fn sections(form: &ContactForm, density: Density, width: u16) -> Vec<(Section, u16)> {
    let roomy = density == Density::Comfortable;
    let mut out = Vec::with_capacity(10);

    if roomy {
        out.push((Section::Spacer, 1));
    }
    for field in Field::ALL {
        let height = calculate_input_field_height(&field_config(form, field, density), width);
        out.push((Section::Input(field), height));
    }
    if roomy {
        out.push((Section::Spacer, 1));
    }
    out.push((Section::Button, 1));
    if let Some(submitted) = form.submitted() {
        if roomy {
            out.push((Section::Spacer, 1));
        }
        out.push((Section::Summary, summary_height(submitted, width)));
    }
    if roomy {
        out.push((Section::Spacer, 1));
        out.push((Section::Hints, 1));
    }
    out
}

/// Content height of the form for its current state, `width` columns wide.
fn form_content_height(form: &ContactForm, density: Density, width: u16) -> u16 {
    sections(form, density, width)
        .iter()
        .fold(0u16, |total, (_, height)| total.saturating_add(*height))
}

/// The roomiest density whose content fits in `rows`.
fn choose_density(form: &ContactForm, rows: u16, width: u16) -> Density {
    if form_content_height(form, Density::Comfortable, width) <= rows {
        Density::Comfortable
    } else {
        Density::Compact
    }
}

/// Section that must stay on screen: the summary right after an accepted
/// submit, otherwise whatever has focus.
fn anchor(form: &ContactForm) -> Section {
    if form.phase() == FormPhase::Submitted && form.submitted().is_some() {
        return Section::Summary;
    }
    match form.focus_target() {
        Focus::Field(field) => Section::Input(field),
        Focus::Submit => Section::Button,
    }
}

/// Index of the first section to draw so that the anchor fits in `rows`,
/// showing as much of the form above it as possible.
fn first_visible(sections: &[(Section, u16)], anchor: Section, rows: u16) -> usize {
    let Some(end) = sections.iter().position(|(section, _)| *section == anchor) else {
        return 0;
    };
    let mut start = end;
    let mut used = sections[end].1;
    while start > 0 {
        let above = sections[start - 1].1;
        if used.saturating_add(above) > rows {
            break;
        }
        used += above;
        start -= 1;
    }
    start
}

fn key_hints() -> Line<'static> {
    let key = Style::default().fg(Color::Green);
    let dim = Style::default().fg(COLOR_DIM);
    Line::from(vec![
        Span::styled("[Tab]", key),
        Span::styled(" Next  ", dim),
        Span::styled("[Enter]", key),
        Span::styled(" Submit  ", dim),
        Span::styled("[Ctrl+R]", key),
        Span::styled(" Reset  ", dim),
        Span::styled("[Esc]", key),
        Span::styled(" Quit", dim),
    ])
}

/// Hands out consecutive rows of `area`, clipped to its bottom edge.
struct RowCursor {
    area: Rect,
    y: u16,
}

impl RowCursor {
    fn new(area: Rect) -> Self {
        Self { area, y: area.y }
    }

    fn take(&mut self, height: u16) -> Rect {
        let rect = Rect::new(self.area.x, self.y, self.area.width, height).intersection(self.area);
        self.y = self.y.saturating_add(height);
        rect
    }
}

/// Draw a scroll marker on the frame border just outside `inner`.
fn render_scroll_marker(frame: &mut Frame, inner: Rect, symbol: &'static str, top: bool) {
    if inner.width < 2 {
        return;
    }
    let y = if top {
        inner.y.saturating_sub(1)
    } else {
        inner.bottom()
    };
    let marker = Rect::new(inner.right() - 2, y, 1, 1).intersection(frame.area());
    frame.render_widget(
        Paragraph::new(Span::styled(symbol, Style::default().fg(COLOR_DIM))),
        marker,
    );
}

/// Render the whole contact form into `frame`.
pub fn render_contact_form(frame: &mut Frame, form: &ContactForm, hit_areas: &mut HitAreaRegistry) {
    hit_areas.clear();

    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);
    let config = DialogFrameConfig::new(FORM_TITLE, 0);
    let content_width = calculate_dialog_width(&ctx, &config, area.width).saturating_sub(2);
    let available = area.height.saturating_sub(2);

    let density = choose_density(form, available, content_width);
    let sections = sections(form, density, content_width);
    let total = form_content_height(form, density, content_width);
    let config = config.content_height(total);
    let inner = render_dialog_frame(frame, area, &ctx, &config);

    let start = if total > inner.height {
        first_visible(&sections, anchor(form), inner.height)
    } else {
        0
    };
    if start > 0 {
        tracing::trace!(start, total, rows = inner.height, "form scrolled");
    }

    let mut rows = RowCursor::new(inner);
    for &(section, height) in &sections[start..] {
        let slot = rows.take(height);
        if slot.height == 0 {
            continue;
        }
        match section {
            Section::Spacer => {}
            Section::Input(field) => {
                let config = field_config(form, field, density);
                let box_rect = render_input_field(frame, slot, &config);
                hit_areas.register(box_rect, ClickAction::FocusField(field), None);
            }
            Section::Button => {
                hit_areas.register(
                    button_rect(slot, SUBMIT_LABEL),
                    ClickAction::Submit,
                    Some(Style::default().add_modifier(Modifier::REVERSED)),
                );
                let hover = hit_areas.hover_style_for(ClickAction::Submit);
                render_button(
                    frame,
                    slot,
                    SUBMIT_LABEL,
                    form.focus_target() == Focus::Submit,
                    hover,
                );
            }
            Section::Summary => {
                if let Some(submitted) = form.submitted() {
                    render_summary(frame, slot, submitted);
                }
            }
            Section::Hints => {
                let hints_area = Rect::new(slot.x + 2, slot.y, slot.width.saturating_sub(4), 1);
                frame.render_widget(Paragraph::new(key_hints()), hints_area.intersection(slot));
            }
        }
    }

    if start > 0 {
        render_scroll_marker(frame, inner, SCROLL_UP, true);
    }
    if rows.y > inner.bottom() {
        render_scroll_marker(frame, inner, SCROLL_DOWN, false);
    }
}
