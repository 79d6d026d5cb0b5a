// TUI application state
//
// Owns every piece of page state the event loop touches: theme preference,
// scroll position and anchors, the compact menu, the contact form and the
// transient overlays (modal, toast). Rendering reads it; only the event
// loop mutates it.

use super::clipboard;
use super::components::Toast;
use super::input::InputHandler;
use super::layout::Breakpoint;
use super::modal::Modal;
use super::scroll::ScrollState;
use crate::config::Config;
use crate::contact::{
    ContactForm, ContactSubmitter, Field, RelayError, SubmissionStatus, ValidationError,
};
use crate::content::{Portfolio, PORTFOLIO};
use crate::menu::MenuController;
use crate::navigation::{ScrollNavigator, Section};
use crate::preferences::PreferenceStore;
use crate::theme::Theme;
use crossterm::event::KeyCode;
use std::path::PathBuf;
use tokio::sync::watch;

pub struct App {
    /// Static page content
    pub content: &'static Portfolio,

    /// Theme preference (persisted) and the live ThemeContext
    pub prefs: PreferenceStore,

    /// Section anchors from the last composed frame
    pub navigator: ScrollNavigator,

    pub scroll: ScrollState,

    pub menu: MenuController,

    pub form: ContactForm,

    /// Focused form element, None while browsing the page
    pub focus: Option<Field>,

    submitter: ContactSubmitter,

    /// Observes form status transitions for the operator log
    status_rx: watch::Receiver<SubmissionStatus>,

    /// Active modal dialog (None = no modal)
    pub modal: Option<Modal>,

    /// Active toast notification (auto-dismisses)
    pub toast: Option<Toast>,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,

    /// Layout class of the last frame
    pub breakpoint: Breakpoint,

    /// Local resume file opened by the "Download Resume" action
    resume: Option<PathBuf>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, prefs: PreferenceStore, submitter: ContactSubmitter) -> Self {
        let form = ContactForm::new();
        let status_rx = form.subscribe();
        Self {
            content: &PORTFOLIO,
            prefs,
            navigator: ScrollNavigator::new(),
            scroll: ScrollState::new(config.ui.animations),
            menu: MenuController::new(config.ui.effective_menu_frames()),
            form,
            focus: None,
            submitter,
            status_rx,
            modal: None,
            toast: None,
            input_handler: InputHandler::new(),
            breakpoint: Breakpoint::Normal,
            resume: config.assets.resume.clone(),
            should_quit: false,
        }
    }

    pub fn theme(&self) -> &Theme {
        self.prefs.context().theme()
    }

    /// Handle a key press, returns true if action should be taken
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Direct jump (nav links, digit keys, hero buttons). Never waits on the
    /// menu: an open panel is simply dismissed.
    pub fn navigate_to(&mut self, section: Section) {
        self.menu.close();
        self.navigator.scroll_to(section, &mut self.scroll);
    }

    /// Section whose anchor is nearest above the top of the viewport
    pub fn current_section(&self) -> Section {
        self.navigator
            .anchors()
            .section_at(self.scroll.offset())
            .unwrap_or(Section::About)
    }

    pub fn toggle_menu(&mut self) {
        if self.breakpoint.shows_inline_nav() {
            return;
        }
        self.menu.toggle();
        tracing::trace!("Menu {:?}", self.menu.state());
    }

    /// Record the layout class; the compact menu closes once nav links are inline
    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) {
        if breakpoint != self.breakpoint {
            tracing::trace!("Layout breakpoint: {:?} -> {:?}", self.breakpoint, breakpoint);
            self.breakpoint = breakpoint;
            if breakpoint.shows_inline_nav() {
                self.menu.close();
            }
        }
    }

    /// Periodic tick: menu transition, scroll easing, toast expiry
    pub fn on_tick(&mut self) {
        if let Some(target) = self.menu.tick() {
            self.navigator.scroll_to(target, &mut self.scroll);
        }
        if self.scroll.is_animating() {
            self.scroll.tick();
        }
        if self.status_rx.has_changed().unwrap_or(false) {
            let status = *self.status_rx.borrow_and_update();
            tracing::debug!("Contact form status: {}", status);
        }
        self.clear_expired_toast();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────────────────────

    pub fn toggle_theme(&mut self) {
        let next = self.prefs.toggle();
        self.show_toast(Toast::new(format!("Theme: {}", next)));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Contact form
    // ─────────────────────────────────────────────────────────────────────────

    pub fn focus_form(&mut self) {
        if self.focus.is_none() {
            self.focus = Some(Field::default());
            self.navigate_to(Section::Contact);
        }
    }

    pub fn leave_form(&mut self) {
        self.focus = None;
    }

    pub fn focus_next(&mut self) {
        self.focus = Some(self.focus.map(Field::next).unwrap_or_default());
    }

    pub fn focus_prev(&mut self) {
        self.focus = Some(self.focus.map(Field::prev).unwrap_or(Field::Submit));
    }

    /// Typed character into the focused input
    pub fn type_char(&mut self, c: char) {
        if let Some(field) = self.focus {
            self.form.push_char(field, c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focus {
            self.form.pop_char(field);
        }
    }

    /// Enter: next field, newline in the message, submit on the button
    pub fn form_enter(&mut self) {
        match self.focus {
            Some(Field::Submit) => {
                self.submit_form();
            }
            Some(field) if field.is_multiline() => self.form.push_char(field, '\n'),
            Some(_) => self.focus_next(),
            None => {}
        }
    }

    /// Validate then hand off to the submitter. Returns whether a relay call started.
    pub fn submit_form(&mut self) -> bool {
        if self.form.status() == SubmissionStatus::Sending {
            return false;
        }
        if let Err(e) = self.form.validate() {
            tracing::debug!("Contact form rejected locally: {}", e);
            self.focus = Some(match e {
                ValidationError::Missing(field) => field,
                ValidationError::InvalidEmail => Field::Email,
            });
            self.show_toast(Toast::error(e.to_string()));
            return false;
        }
        self.submitter.submit(&mut self.form)
    }

    /// Relay outcome delivered by the event loop
    pub fn apply_outcome(&mut self, outcome: Result<(), RelayError>) {
        self.form.complete(outcome);
        match self.form.status() {
            SubmissionStatus::Success => {
                self.focus = None;
                self.show_toast(Toast::success("Message sent. Thanks!"));
            }
            SubmissionStatus::Error => {
                self.show_toast(Toast::error("Could not send the message"));
            }
            _ => {}
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // External actions
    // ─────────────────────────────────────────────────────────────────────────

    pub fn copy_email(&mut self) {
        let email = self.content.profile.email;
        match clipboard::copy_to_clipboard(email) {
            Ok(()) => self.show_toast(Toast::success("✓ Email copied to clipboard")),
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {:#}", e);
                self.show_toast(Toast::error("✗ Failed to copy"));
            }
        }
    }

    /// Open a social profile by label ("GitHub", "LinkedIn")
    pub fn open_social(&mut self, label: &str) {
        let Some(link) = self.content.social(label) else {
            return;
        };
        match clipboard::open_url(link.url) {
            Ok(()) => self.show_toast(Toast::new(format!("Opening {}", link.label))),
            Err(e) => {
                tracing::warn!("{:#}", e);
                self.show_toast(Toast::error(format!("✗ Could not open {}", link.label)));
            }
        }
    }

    pub fn open_resume(&mut self) {
        let Some(path) = self.resume.clone() else {
            self.show_toast(Toast::new("No resume configured"));
            return;
        };
        match clipboard::open_file(&path) {
            Ok(()) => self.show_toast(Toast::new("Opening resume")),
            Err(e) => {
                tracing::warn!("Resume unavailable: {:#}", e);
                self.show_toast(Toast::error("✗ Resume not found"));
            }
        }
    }

    pub fn show_help(&mut self) {
        self.modal = Some(Modal::help());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Toast
    // ─────────────────────────────────────────────────────────────────────────

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    /// Clear expired toast (call after render)
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::relay::RelayFuture;
    use crate::contact::{ContactSubmission, MailRelay};
    use crate::menu::MenuState;
    use crate::navigation::SectionAnchors;
    use crate::preferences::MemoryStore;
    use crate::theme::ThemePreference;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    struct AcceptingRelay;

    impl MailRelay for AcceptingRelay {
        fn name(&self) -> &'static str {
            "accepting"
        }

        fn send<'a>(&'a self, _submission: &'a ContactSubmission) -> RelayFuture<'a> {
            Box::pin(async { Ok(()) })
        }
    }

    fn app() -> (App, mpsc::Receiver<Result<(), RelayError>>) {
        let (tx, rx) = mpsc::channel(4);
        let submitter = ContactSubmitter::new(Arc::new(AcceptingRelay), tx);
        let prefs = PreferenceStore::open(Box::new(MemoryStore::new()));
        let mut app = App::new(&Config::default(), prefs, submitter);

        let mut anchors = SectionAnchors::new();
        anchors.insert(Section::About, 0);
        anchors.insert(Section::Skills, 25);
        anchors.insert(Section::Projects, 50);
        anchors.insert(Section::Contact, 110);
        app.navigator.set_anchors(anchors);
        app.scroll.update_dimensions(160, 30);
        (app, rx)
    }

    fn settle(app: &mut App) {
        for _ in 0..100 {
            app.on_tick();
        }
    }

    #[test]
    fn menu_link_scrolls_only_after_closing() {
        let (mut app, _rx) = app();
        app.set_breakpoint(Breakpoint::Compact);
        app.toggle_menu();
        assert_eq!(app.menu.state(), MenuState::Open);

        app.menu.select_link(Section::Projects);
        app.on_tick();
        assert_eq!(app.scroll.offset(), 0);
        assert!(!app.scroll.is_animating());

        settle(&mut app);
        assert_eq!(app.scroll.offset(), 50);
        assert_eq!(app.current_section(), Section::Projects);
    }

    #[test]
    fn menu_toggle_ignored_with_inline_nav() {
        let (mut app, _rx) = app();
        app.set_breakpoint(Breakpoint::Wide);
        app.toggle_menu();
        assert!(!app.menu.is_open());
    }

    #[test]
    fn widening_closes_the_menu() {
        let (mut app, _rx) = app();
        app.set_breakpoint(Breakpoint::Compact);
        app.toggle_menu();
        app.set_breakpoint(Breakpoint::Normal);
        assert!(!app.menu.is_open());
    }

    #[test]
    fn direct_navigation_clamps_to_last_page() {
        let (mut app, _rx) = app();
        app.scroll.update_dimensions(130, 30);
        app.navigate_to(Section::Contact);
        settle(&mut app);
        assert_eq!(app.scroll.offset(), 100);
    }

    #[test]
    fn theme_toggle_flips_and_persists() {
        let (mut app, _rx) = app();
        assert_eq!(app.prefs.context().preference(), ThemePreference::Dark);

        app.toggle_theme();
        assert_eq!(app.prefs.context().preference(), ThemePreference::Light);
        assert_eq!(app.prefs.load(), ThemePreference::Light);
        assert_eq!(app.theme().name, "light");
    }

    #[test]
    fn invalid_form_never_reaches_submitter() {
        let (mut app, mut rx) = app();
        app.form.set_value(Field::Name, "Jane");
        app.form.set_value(Field::Email, "jane");
        app.form.set_value(Field::Message, "Hi");

        assert!(!app.submit_form());
        assert_eq!(app.form.status(), SubmissionStatus::Idle);
        assert_eq!(app.focus, Some(Field::Email));
        assert!(app.toast.is_some());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn form_enter_moves_through_fields() {
        let (mut app, _rx) = app();
        app.focus_form();
        assert_eq!(app.focus, Some(Field::Name));

        app.type_char('J');
        app.form_enter();
        assert_eq!(app.focus, Some(Field::Email));

        app.focus = Some(Field::Message);
        app.type_char('a');
        app.form_enter();
        app.type_char('b');
        assert_eq!(app.form.value(Field::Message), "a\nb");
        app.backspace();
        assert_eq!(app.form.value(Field::Message), "a\n");
    }

    #[tokio::test]
    async fn valid_form_sends_and_clears() {
        let (mut app, mut rx) = app();
        app.focus_form();
        app.form.set_value(Field::Name, "Jane Doe");
        app.form.set_value(Field::Email, "jane@example.com");
        app.form.set_value(Field::Message, "Hello");

        assert!(app.submit_form());
        assert_eq!(app.form.status(), SubmissionStatus::Sending);
        assert!(!app.submit_form());

        let outcome = rx.recv().await.unwrap();
        app.apply_outcome(outcome);

        assert_eq!(app.form.status(), SubmissionStatus::Success);
        assert!(app.form.is_empty());
        assert_eq!(app.focus, None);
    }
}
