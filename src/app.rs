//! Application state and event handling.
//!
//! [`App`] wraps the [`ContactForm`] with everything the terminal front end
//! needs: key bindings, the hit-area registry filled in by the renderer, and
//! the quit flag. Event handling is synchronous; each event is applied to the
//! form before the next frame is drawn.

use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::form::{ContactForm, Focus};
use crate::input::{Command, KeybindingConfig};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};

#[derive(Debug, Default)]
pub struct App {
    form: ContactForm,
    keybindings: KeybindingConfig,
    hit_areas: HitAreaRegistry,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn hit_areas(&self) -> &HitAreaRegistry {
        &self.hit_areas
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Split borrow for the renderer.
    pub(crate) fn render_parts(&mut self) -> (&ContactForm, &mut HitAreaRegistry) {
        (&self.form, &mut self.hit_areas)
    }

    /// Apply one terminal event. Returns `true` when a redraw is needed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) => self.form.paste(text),
            Event::Resize(_, _) => true,
            _ => false,
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match self.keybindings.resolve(key, self.form.focus_target()) {
            Some(cmd) => self.execute(cmd),
            None => false,
        }
    }

    /// Run a command against the form. Returns `true` when a redraw is needed.
    pub fn execute(&mut self, cmd: Command) -> bool {
        tracing::trace!(?cmd, "command");
        match cmd {
            Command::Quit => {
                self.should_quit = true;
                false
            }
            Command::Submit | Command::Activate => {
                self.form.submit();
                true
            }
            Command::Reset => {
                self.form.reset();
                true
            }
            Command::FocusNext => {
                self.form.focus_next();
                true
            }
            Command::FocusPrev => {
                self.form.focus_prev();
                true
            }
            Command::InsertChar(c) => self.form.insert_char(c),
            Command::InsertNewline => self.form.insert_char('\n'),
            Command::Backspace => self.form.backspace(),
            Command::ClearField => self.form.clear_field(),
        }
    }

    pub fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match self.hit_areas.hit_test(mouse.column, mouse.row) {
                    Some(action) => self.click(action),
                    None => false,
                }
            }
            MouseEventKind::Moved => self.hit_areas.update_hover(mouse.column, mouse.row),
            _ => false,
        }
    }

    /// Act on a click target as if the user had clicked it.
    pub fn click(&mut self, action: ClickAction) -> bool {
        match action {
            ClickAction::FocusField(field) => self.form.focus_field(field),
            ClickAction::Submit => {
                self.form.focus(Focus::Submit);
                self.form.submit();
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Field, FormPhase};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());

        let mut app = App::new();
        app.handle_event(&Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit());
    }

    #[test]
    fn test_keyboard_fill_and_submit() {
        let mut app = App::new();
        type_str(&mut app, "abcde");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "fghij");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "my@my.com");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.form().phase(), FormPhase::Submitted);
        assert_eq!(app.form().submitted().unwrap().email, "my@my.com");
    }

    #[test]
    fn test_enter_in_message_adds_newline() {
        let mut app = App::new();
        app.form_mut().focus_field(Field::Message);
        type_str(&mut app, "hi");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "there");
        assert_eq!(app.form().value(Field::Message), "hi\nthere");
        assert!(app.form().submitted().is_none());
    }

    #[test]
    fn test_paste_goes_to_focused_field() {
        let mut app = App::new();
        app.handle_event(&Event::Paste("pasted".to_string()));
        assert_eq!(app.form().value(Field::FirstName), "pasted");
    }

    #[test]
    fn test_paste_with_crlf_into_first_name() {
        let mut app = App::new();
        assert!(app.handle_event(&Event::Paste("abcde\r\n".to_string())));
        assert_eq!(app.form().value(Field::FirstName), "abcde");
    }

    #[test]
    fn test_paste_control_only_into_last_name_stays_empty() {
        let mut app = App::new();
        app.form_mut().focus_field(Field::LastName);
        assert!(!app.handle_event(&Event::Paste("\r\t".to_string())));
        assert_eq!(app.form().value(Field::LastName), "");
        app.execute(Command::Submit);
        assert_eq!(
            app.form().error(Field::LastName),
            Some(crate::form::ValidationError::LastNameRequired)
        );
    }

    #[test]
    fn test_paste_crlf_into_message_becomes_newline() {
        let mut app = App::new();
        app.form_mut().focus_field(Field::Message);
        app.handle_event(&Event::Paste("a\r\nb".to_string()));
        assert_eq!(app.form().value(Field::Message), "a\nb");
    }

    #[test]
    fn test_click_submit_focuses_button_and_submits() {
        let mut app = App::new();
        app.click(ClickAction::Submit);
        assert_eq!(app.form().focus_target(), Focus::Submit);
        assert_eq!(app.form().errors().len(), 3);
    }

    #[test]
    fn test_reset_clears_form() {
        let mut app = App::new();
        type_str(&mut app, "abc");
        app.handle_event(&Event::Key(KeyEvent::new(
            KeyCode::Char('r'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(app.form().value(Field::FirstName), "");
        assert!(app.form().errors().is_empty());
    }
}
