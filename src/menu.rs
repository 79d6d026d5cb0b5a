//! Compact-layout navigation menu
//!
//! Two states, closed by default. Selecting a link closes the menu at once
//! and holds the target until the closing transition has finished; only
//! then does [`MenuController::tick`] hand the target back so the caller
//! can start the scroll. The scroll therefore never overlaps the panel
//! collapsing over the page.

use crate::navigation::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Panel animation in progress, counted in ticks remaining
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Opening(u16),
    Closing(u16),
}

#[derive(Debug, Clone)]
pub struct MenuController {
    state: MenuState,
    transition: Option<Transition>,
    /// Navigation waiting for the closing transition to finish
    pending: Option<Section>,
    /// Length of a full open/close transition in ticks
    frames: u16,
    /// Highlighted link while open
    selected: usize,
}

impl MenuController {
    /// `frames` is the transition length in ticks; 0 disables animation
    pub fn new(frames: u16) -> Self {
        Self {
            state: MenuState::Closed,
            transition: None,
            pending: None,
            frames,
            selected: 0,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Open or animating; the panel occupies screen space
    pub fn is_visible(&self) -> bool {
        self.is_open() || matches!(self.transition, Some(Transition::Closing(_)))
    }

    /// Menu button: flip open/closed. Dismissing the menu drops any
    /// navigation still waiting on a previous close.
    pub fn toggle(&mut self) {
        match self.state {
            MenuState::Closed => {
                self.state = MenuState::Open;
                self.pending = None;
                self.selected = 0;
                self.transition = self.start(Transition::Opening);
            }
            MenuState::Open => self.close(),
        }
    }

    /// Close without navigating (Esc, layout widened, desktop nav used)
    pub fn close(&mut self) {
        if self.state == MenuState::Open {
            self.state = MenuState::Closed;
            self.transition = self.start(Transition::Closing);
        }
    }

    /// Link activation: close now, navigate once the panel is gone
    pub fn select_link(&mut self, target: Section) {
        let was_visible = self.is_visible();
        self.state = MenuState::Closed;
        self.pending = Some(target);
        self.transition = if was_visible {
            match self.transition {
                // Already collapsing: keep the remaining frames
                Some(Transition::Closing(n)) => Some(Transition::Closing(n)),
                _ => Some(Transition::Closing(self.frames)),
            }
        } else {
            Some(Transition::Closing(0))
        };
    }

    /// Activate the highlighted link
    pub fn activate_selected(&mut self) {
        if self.is_open() {
            self.select_link(self.selected_section());
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Section::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + Section::ALL.len() - 1) % Section::ALL.len();
    }

    pub fn selected_section(&self) -> Section {
        Section::ALL[self.selected]
    }

    /// Advance the transition by one tick.
    ///
    /// Returns the pending navigation target on the tick the closing
    /// transition completes.
    pub fn tick(&mut self) -> Option<Section> {
        match self.transition {
            Some(Transition::Opening(0)) => {
                self.transition = None;
                None
            }
            Some(Transition::Opening(n)) => {
                self.transition = Some(Transition::Opening(n - 1));
                None
            }
            Some(Transition::Closing(0)) => {
                self.transition = None;
                self.pending.take()
            }
            Some(Transition::Closing(n)) => {
                self.transition = Some(Transition::Closing(n - 1));
                None
            }
            None => None,
        }
    }

    /// Fraction of the panel height currently shown, 0.0..=1.0
    pub fn visible_fraction(&self) -> f32 {
        let frames = self.frames.max(1) as f32;
        match (self.state, self.transition) {
            (MenuState::Open, Some(Transition::Opening(n))) => 1.0 - n as f32 / frames,
            (MenuState::Open, _) => 1.0,
            (MenuState::Closed, Some(Transition::Closing(n))) => n as f32 / frames,
            (MenuState::Closed, _) => 0.0,
        }
    }

    fn start(&self, transition: fn(u16) -> Transition) -> Option<Transition> {
        Some(transition(self.frames))
    }
}

impl Default for MenuController {
    fn default() -> Self {
        Self::new(4)
    }
}
