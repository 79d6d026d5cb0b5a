// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard/mouse input, animation ticks, relay outcomes)
// - Rendering the page

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod scroll;
pub mod views;

use crate::config::Config;
use crate::contact::{ContactSubmitter, MailRelay, RelayError};
use crate::navigation::Section;
use crate::preferences::PreferenceStore;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::ModalAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, including when the loop returns an error.
pub async fn run_tui(
    config: Config,
    prefs: PreferenceStore,
    relay: Arc<dyn MailRelay>,
    start: Option<Section>,
) -> Result<()> {
    // Relay outcomes flow back into the loop over this channel
    let (outcome_tx, mut outcome_rx) = mpsc::channel(4);
    let submitter = ContactSubmitter::new(relay, outcome_tx);
    let mut app = App::new(&config, prefs, submitter);

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    tracing::info!("Portfolio UI started ({} theme)", app.prefs.context().preference());

    let tick = Duration::from_millis(config.ui.tick_ms);
    let result = run_event_loop(&mut terminal, &mut app, &mut outcome_rx, tick, start).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles three types of events:
/// 1. Keyboard and mouse input
/// 2. Timer ticks (menu transition, scroll easing, toast expiry)
/// 3. Relay outcomes from background contact submissions
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    outcome_rx: &mut mpsc::Receiver<Result<(), RelayError>>,
    tick: Duration,
    mut start: Option<Section>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(tick);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        // Anchors exist once the first frame has been composed
        if let Some(section) = start.take() {
            app.navigate_to(section);
        }

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.on_tick();
            }

            Some(outcome) = outcome_rx.recv() => {
                app.apply_outcome(outcome);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Form editing → Menu → Global → Page scrolling
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }

    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 2: Form editing captures text input
    if handle_form_input(app, &key_event) {
        return;
    }

    // Layer 3: Open menu captures selection keys
    if handle_menu_input(app, &key_event) {
        return;
    }

    // Layer 4: Global keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 5: Page scrolling (repeatable keys)
    let key = key_event.code;
    if !app.handle_key_press(key) {
        return;
    }
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.scroll.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll.scroll_down(),
        KeyCode::PageUp => app.scroll.page_up(),
        KeyCode::PageDown => app.scroll.page_down(),
        KeyCode::Home => app.scroll.scroll_to_top(),
        KeyCode::End => app.scroll.scroll_to_bottom(),
        _ => {}
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if app.modal.is_some() {
        return;
    }
    match mouse_event.kind {
        MouseEventKind::ScrollUp => app.scroll.scroll_up(),
        MouseEventKind::ScrollDown => app.scroll.scroll_down(),
        _ => {}
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if app.modal.is_none() {
        return false;
    }

    if key_event.kind != KeyEventKind::Press {
        return true; // Modal absorbs other non-press events (Repeat, etc.)
    }

    // Debounced like any other action key so the opening '?' doesn't close it
    if !app.handle_key_press(key_event.code) {
        return true;
    }

    let Some(ref mut modal) = app.modal else {
        return false;
    };
    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        ModalAction::Quit => app.should_quit = true,
    }

    true // Modal absorbed the input
}

/// Form editing - returns true if handled
///
/// Typed characters bypass the InputHandler.
fn handle_form_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if app.focus.is_none() {
        return false;
    }

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Char('s') if ctrl => {
            app.submit_form();
        }
        KeyCode::Char('c') if ctrl => app.should_quit = true,
        KeyCode::Char(c) if !ctrl => app.type_char(c),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Enter => app.form_enter(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Esc => app.leave_form(),
        // Scrolling keeps working while the form has focus
        KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => return false,
        _ => {}
    }
    true
}

/// Open compact menu - returns true if handled
fn handle_menu_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if !app.menu.is_open() {
        return false;
    }

    let key = key_event.code;
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            if app.handle_key_press(key) {
                app.menu.select_prev();
            }
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.handle_key_press(key) {
                app.menu.select_next();
            }
            true
        }
        KeyCode::Enter => {
            if app.handle_key_press(key) {
                app.menu.activate_selected();
            }
            true
        }
        KeyCode::Esc => {
            if app.handle_key_press(key) {
                app.menu.close();
            }
            true
        }
        KeyCode::Char(c @ '1'..='4') => {
            if app.handle_key_press(key) {
                if let Some(section) = Section::from_digit(c) {
                    app.menu.select_link(section);
                }
            }
            true
        }
        _ => false,
    }
}

/// Handle global keys - returns true if handled
/// Debounced through InputHandler (one action per press)
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let key = key_event.code;

    let action: fn(&mut App) = match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => |app: &mut App| app.should_quit = true,
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            |app: &mut App| app.should_quit = true
        }
        KeyCode::Char(c @ '1'..='4') => {
            if app.handle_key_press(key) {
                if let Some(section) = Section::from_digit(c) {
                    app.navigate_to(section);
                }
            }
            return true;
        }
        KeyCode::Char('h') => |app: &mut App| app.navigate_to(Section::About),
        KeyCode::Char('p') => |app: &mut App| app.navigate_to(Section::Projects),
        KeyCode::Char('m') => App::toggle_menu,
        KeyCode::Char('t') => App::toggle_theme,
        KeyCode::Char('i') | KeyCode::Tab => App::focus_form,
        KeyCode::BackTab => |app: &mut App| {
            app.focus_form();
            app.focus_prev();
        },
        KeyCode::Char('y') => App::copy_email,
        KeyCode::Char('g') => |app: &mut App| app.open_social("GitHub"),
        KeyCode::Char('l') => |app: &mut App| app.open_social("LinkedIn"),
        KeyCode::Char('d') => App::open_resume,
        KeyCode::Char('?') => App::show_help,
        _ => return false,
    };

    if app.handle_key_press(key) {
        action(app);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::relay::RelayFuture;
    use crate::contact::{ContactSubmission, Field};
    use crate::preferences::MemoryStore;
    use crate::tui::layout::Breakpoint;
    use crate::tui::modal::Modal;

    struct NoRelay;

    impl MailRelay for NoRelay {
        fn name(&self) -> &'static str {
            "none"
        }

        fn send<'a>(&'a self, _submission: &'a ContactSubmission) -> RelayFuture<'a> {
            Box::pin(async { Ok(()) })
        }
    }

    fn app() -> App {
        let (tx, _rx) = mpsc::channel(1);
        let submitter = ContactSubmitter::new(Arc::new(NoRelay), tx);
        let prefs = PreferenceStore::open(Box::new(MemoryStore::new()));
        App::new(&Config::default(), prefs, submitter)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn typing_in_form_is_not_debounced() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.focus, Some(Field::Name));

        for c in "Anna".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.form.value(Field::Name), "Anna");
    }

    #[test]
    fn quit_key_is_text_inside_the_form() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, None);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn modal_absorbs_keys() {
        let mut app = app();
        app.modal = Some(Modal::help());
        press(&mut app, KeyCode::Char('t'));
        assert!(app.modal.is_some());
        assert!(app.prefs.context().is_dark());

        press(&mut app, KeyCode::Esc);
        assert!(app.modal.is_none());
    }

    #[test]
    fn menu_keys_only_apply_when_open() {
        let mut app = app();
        app.set_breakpoint(Breakpoint::Compact);
        press(&mut app, KeyCode::Char('m'));
        assert!(app.menu.is_open());

        press(&mut app, KeyCode::Down);
        assert_eq!(app.menu.selected_section(), Section::Skills);

        press(&mut app, KeyCode::Enter);
        assert!(!app.menu.is_open());
    }

    #[test]
    fn theme_key_toggles() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        assert!(!app.prefs.context().is_dark());
    }
}
