//! The form on a standard 80x24 terminal and smaller: the summary and the
//! Submit button must stay on screen and clickable.

mod common;

use common::{click_submit_sized, key, render_sized, type_into_sized};
use contact_form::app::App;
use contact_form::form::{Field, Focus, FormPhase};
use crossterm::event::KeyCode;

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

fn fill(app: &mut App, message: Option<&str>) {
    type_into_sized(app, "First Name", "abcde", WIDTH, HEIGHT);
    type_into_sized(app, "Last Name", "fghij", WIDTH, HEIGHT);
    type_into_sized(app, "Email", "my@my.com", WIDTH, HEIGHT);
    if let Some(message) = message {
        type_into_sized(app, "Message", message, WIDTH, HEIGHT);
    }
}

#[test]
fn summary_is_visible_after_submit_with_message() {
    let mut app = App::new();
    fill(&mut app, Some("hello there"));
    click_submit_sized(&mut app, WIDTH, HEIGHT);
    assert_eq!(app.form().phase(), FormPhase::Submitted);

    let screen = render_sized(&mut app, WIDTH, HEIGHT);
    assert!(screen.contains("you submitted:"), "{}", screen.text());
    assert!(screen.contains("First Name: abcde"));
    assert!(screen.contains("Last Name: fghij"));
    assert!(screen.contains("Email: my@my.com"));
    assert!(screen.contains("Message: hello there"));
    assert!(screen.contains("[ Submit ]"));
}

#[test]
fn submit_button_survives_an_empty_submit() {
    let mut app = App::new();
    click_submit_sized(&mut app, WIDTH, HEIGHT);

    let screen = render_sized(&mut app, WIDTH, HEIGHT);
    assert_eq!(screen.count("error:"), 3, "{}", screen.text());
    assert!(screen.contains("[ Submit ]"));
    // four inputs plus the button
    assert_eq!(app.hit_areas().len(), 5);

    fill(&mut app, None);
    click_submit_sized(&mut app, WIDTH, HEIGHT);
    assert_eq!(app.form().phase(), FormPhase::Submitted);
    let screen = render_sized(&mut app, WIDTH, HEIGHT);
    assert_eq!(screen.count("error:"), 0);
    assert!(screen.contains("First Name: abcde"));
}

#[test]
fn errors_and_previous_summary_fit_together() {
    let mut app = App::new();
    fill(&mut app, Some("hi"));
    click_submit_sized(&mut app, WIDTH, HEIGHT);

    app.form_mut().set_value(Field::FirstName, "");
    app.form_mut().set_value(Field::LastName, "");
    app.form_mut().set_value(Field::Email, "");
    click_submit_sized(&mut app, WIDTH, HEIGHT);
    assert_eq!(app.form().errors().len(), 3);

    let screen = render_sized(&mut app, WIDTH, HEIGHT);
    assert_eq!(screen.count("error:"), 3, "{}", screen.text());
    assert!(screen.contains("[ Submit ]"));
    assert!(screen.contains("First Name: abcde"));
    assert!(screen.contains("Message: hi"));
    assert_eq!(app.hit_areas().len(), 5);
}

#[test]
fn short_terminal_keeps_summary_in_view() {
    let mut app = App::new();
    fill(&mut app, None);
    key(&mut app, KeyCode::Tab);
    assert_eq!(app.form().focus_target(), Focus::Field(Field::Message));
    for c in "hello".chars() {
        key(&mut app, KeyCode::Char(c));
    }
    // scrolled so the focused message box and the button are on screen
    click_submit_sized(&mut app, 60, 12);
    assert_eq!(app.form().phase(), FormPhase::Submitted);

    let screen = render_sized(&mut app, 60, 12);
    assert!(screen.contains("you submitted:"), "{}", screen.text());
    assert!(screen.contains("Message: hello"));
    assert!(screen.contains("[ Submit ]"));
}
