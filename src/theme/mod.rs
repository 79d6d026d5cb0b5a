// Theme system for the portfolio page
//
// Two palettes (light, dark) selected by a single persisted preference.
// Rendering never toggles the theme itself: it reads a `ThemeContext`
// that only the preference store writes to.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// The one user preference this app persists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// Storage representation ("dark" / "light")
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parse the storage representation. Anything else is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    /// The other preference
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Resolve the palette for this preference
    pub fn theme(&self) -> Theme {
        match self {
            ThemePreference::Light => Theme::light(),
            ThemePreference::Dark => Theme::dark(),
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete resolved palette ready for use in the TUI.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,

    // ─── Secondary/Muted Text ────────────────────────────────
    pub muted: Color,
    pub subtle: Color,

    // ─── Accents ─────────────────────────────────────────────
    /// Brand color: section markers, links, primary button
    pub accent: Color,
    /// Gradient partner for the headline
    pub accent_alt: Color,

    // ─── Chrome ──────────────────────────────────────────────
    pub border: Color,
    pub highlight: Color,
    pub border_type: BorderType,

    // ─── Selection Colors ────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,

    // ─── Form feedback ───────────────────────────────────────
    pub success: Color,
    pub error: Color,
    pub input_bg: Color,
}

impl Theme {
    /// Slate/indigo dark palette (default)
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::Rgb(2, 6, 23),   // slate-950
            foreground: Color::Rgb(226, 232, 240), // slate-200
            muted: Color::Rgb(148, 163, 184),   // slate-400
            subtle: Color::Rgb(100, 116, 139),  // slate-500
            accent: Color::Rgb(129, 140, 248),  // indigo-400
            accent_alt: Color::Rgb(34, 211, 238), // cyan-400
            border: Color::Rgb(30, 41, 59),     // slate-800
            highlight: Color::Rgb(99, 102, 241), // indigo-500
            border_type: BorderType::Rounded,
            selection: Color::Rgb(49, 46, 129), // indigo-900
            selection_fg: Color::Rgb(199, 210, 254), // indigo-200
            success: Color::Rgb(74, 222, 128),
            error: Color::Rgb(248, 113, 113),
            input_bg: Color::Rgb(15, 23, 42), // slate-900
        }
    }

    /// Light palette
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::Rgb(248, 250, 252), // slate-50
            foreground: Color::Rgb(15, 23, 42),    // slate-900
            muted: Color::Rgb(71, 85, 105),        // slate-600
            subtle: Color::Rgb(100, 116, 139),     // slate-500
            accent: Color::Rgb(79, 70, 229),       // indigo-600
            accent_alt: Color::Rgb(8, 145, 178),   // cyan-600
            border: Color::Rgb(203, 213, 225),     // slate-300
            highlight: Color::Rgb(67, 56, 202),    // indigo-700
            border_type: BorderType::Rounded,
            selection: Color::Rgb(224, 231, 255), // indigo-100
            selection_fg: Color::Rgb(49, 46, 129),
            success: Color::Rgb(22, 163, 74),
            error: Color::Rgb(220, 38, 38),
            input_bg: Color::Rgb(241, 245, 249), // slate-100
        }
    }

    // Helper methods for creating styles

    /// Base style with theme foreground
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    /// Secondary text
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Border style (unfocused)
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border style (focused)
    pub fn border_focused_style(&self) -> Style {
        Style::default().fg(self.highlight)
    }

    /// Section headings and brand text
    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .add_modifier(Modifier::BOLD)
    }

    /// Accent text (links, markers)
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Selected item style
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection)
            .add_modifier(Modifier::BOLD)
    }

    /// Badge chips ("Java", "Spring Boot", ...)
    pub fn badge_style(&self) -> Style {
        Style::default().fg(self.muted).bg(self.input_bg)
    }

    /// Error style
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Success style
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success).add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// The document-wide presentation mode.
///
/// Passed by reference to everything that renders. The only mutator is
/// crate-private and is called by [`crate::preferences::PreferenceStore::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeContext {
    preference: ThemePreference,
    theme: Theme,
}

impl ThemeContext {
    pub fn new(preference: ThemePreference) -> Self {
        Self {
            preference,
            theme: preference.theme(),
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.preference == ThemePreference::Dark
    }

    /// Switch the presentation mode. Returns whether anything changed.
    pub(crate) fn set(&mut self, preference: ThemePreference) -> bool {
        if self.preference == preference {
            return false;
        }
        self.preference = preference;
        self.theme = preference.theme();
        true
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(ThemePreference::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_the_two_literals() {
        assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
        assert_eq!(ThemePreference::parse("light"), Some(ThemePreference::Light));
        assert_eq!(ThemePreference::parse("Dark"), None);
        assert_eq!(ThemePreference::parse(""), None);
        assert_eq!(ThemePreference::parse("system"), None);
    }

    #[test]
    fn default_preference_is_dark() {
        assert_eq!(ThemePreference::default(), ThemePreference::Dark);
        assert!(ThemeContext::default().is_dark());
    }

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
    }

    #[test]
    fn context_set_reports_change_once() {
        let mut ctx = ThemeContext::new(ThemePreference::Dark);
        assert!(ctx.set(ThemePreference::Light));
        assert!(!ctx.set(ThemePreference::Light));
        assert_eq!(ctx.theme(), &Theme::light());
    }
}
