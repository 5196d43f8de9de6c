//! Shared helpers for integration tests.
//!
//! Tests drive an [`App`] the way a user would (clicks and key presses),
//! render it into a `TestBackend`, and query the resulting screen text.

#![allow(dead_code)]

use contact_form::app::App;
use contact_form::ui;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

pub const SCREEN_WIDTH: u16 = 100;
pub const SCREEN_HEIGHT: u16 = 50;

/// Plain text of a rendered frame, one string per row.
#[derive(Debug, Clone)]
pub struct Screen {
    rows: Vec<String>,
}

impl Screen {
    pub fn text(&self) -> String {
        self.rows.join("\n")
    }

    /// Case-insensitive substring match anywhere on screen.
    pub fn contains(&self, needle: &str) -> bool {
        self.count(needle) > 0
    }

    /// Case-insensitive occurrence count, summed over rows.
    pub fn count(&self, needle: &str) -> usize {
        let needle = needle.to_lowercase();
        self.rows
            .iter()
            .map(|row| row.to_lowercase().matches(&needle).count())
            .sum()
    }

    /// Column and row of the first occurrence of `needle` (exact case).
    pub fn find(&self, needle: &str) -> Option<(u16, u16)> {
        self.rows.iter().enumerate().find_map(|(y, row)| {
            row.find(needle).map(|byte_idx| {
                let x = row[..byte_idx].chars().count();
                (x as u16, y as u16)
            })
        })
    }
}

/// Render `app` into a fresh test terminal and capture the screen.
pub fn render(app: &mut App) -> Screen {
    render_sized(app, SCREEN_WIDTH, SCREEN_HEIGHT)
}

/// Render `app` into a fresh `width` x `height` test terminal.
pub fn render_sized(app: &mut App, width: u16, height: u16) -> Screen {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let rows = (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect();
    Screen { rows }
}

pub fn key(app: &mut App, code: KeyCode) {
    app.handle_event(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

pub fn mouse_click(app: &mut App, column: u16, row: u16) {
    app.handle_event(&Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }));
}

/// Click the input labelled `label` and type `text` into it, key by key.
pub fn type_into(app: &mut App, label: &str, text: &str) {
    type_into_sized(app, label, text, SCREEN_WIDTH, SCREEN_HEIGHT);
}

/// `type_into` as laid out on a `width` x `height` terminal.
pub fn type_into_sized(app: &mut App, label: &str, text: &str, width: u16, height: u16) {
    let field = app
        .form()
        .field_by_label(label)
        .unwrap_or_else(|| panic!("no field labelled {label:?}"));

    let screen = render_sized(app, width, height);
    let (x, y) = screen
        .find(field.label())
        .unwrap_or_else(|| panic!("label {:?} not on screen", field.label()));
    // the row below the label is inside the box, whether the label sits
    // above the box or in its top border
    mouse_click(app, x + 1, y + 1);

    for c in text.chars() {
        key(app, KeyCode::Char(c));
    }
}

/// Click the Submit button.
pub fn click_submit(app: &mut App) {
    click_submit_sized(app, SCREEN_WIDTH, SCREEN_HEIGHT);
}

/// Click the Submit button as laid out on a `width` x `height` terminal.
pub fn click_submit_sized(app: &mut App, width: u16, height: u16) {
    let screen = render_sized(app, width, height);
    let (x, y) = screen.find("[ Submit ]").expect("submit button not on screen");
    mouse_click(app, x + 2, y);
}
