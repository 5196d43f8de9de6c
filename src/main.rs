use contact_form::app::App;
use contact_form::cli::{parse_args, run_cli_command, CliCommand};
use contact_form::config::AppConfig;
use contact_form::form::SubmittedValues;
use contact_form::logging::init_logging;
use contact_form::terminal::{setup_panic_hook, TerminalManager};
use contact_form::ui;

use color_eyre::Result;
use crossterm::event;

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if run_cli_command(&command) {
        return Ok(());
    }
    let print_json = matches!(command, CliCommand::RunTui { print_json: true });

    color_eyre::install()?;
    // after color_eyre so its hook is the one wrapped
    setup_panic_hook();

    let config = AppConfig::from_env().with_print_json(print_json);
    init_logging(&config)?;

    let submitted = run_tui()?;

    if config.print_json {
        if let Some(submitted) = submitted {
            println!("{}", serde_json::to_string_pretty(&submitted)?);
        }
    }
    Ok(())
}

/// Run the form until the user quits; returns the last accepted submission.
fn run_tui() -> Result<Option<SubmittedValues>> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new();

    {
        let terminal = manager.terminal();
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        while !app.should_quit() {
            let event = event::read()?;
            if app.handle_event(&event) {
                terminal.draw(|frame| ui::render(frame, &mut app))?;
            }
        }
    }

    manager.restore();
    tracing::info!(submitted = app.form().submitted().is_some(), "exiting");
    Ok(app.form().submitted().cloned())
}
