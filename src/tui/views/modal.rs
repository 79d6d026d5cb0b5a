// Modal overlay rendering
//
// Modals are rendered on top of the page:
// - Help modal: keyboard shortcuts and current theme

use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    let theme = app.theme();
    let key_style = Style::default().fg(theme.accent_alt);
    let desc_style = Style::default().fg(theme.foreground);
    let header_style = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(theme.border);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Navigation", header_style)),
        kb("↑/↓, j/k", "Scroll the page"),
        kb("PgUp/PgDn", "Scroll by a screen"),
        kb("Home/End", "Jump to top/bottom"),
        kb("1-4", "About, Skills, Projects, Contact"),
        kb("h, p", "Back to top / View projects"),
        kb("m", "Menu (narrow terminals)"),
        Line::raw(""),
        Line::from(Span::styled("  Contact", header_style)),
        kb("i, Tab", "Write a message"),
        kb("Tab/S-Tab", "Next / previous field"),
        kb("Ctrl-S", "Send"),
        kb("Esc", "Leave the form"),
        kb("y", "Copy email address"),
        Line::raw(""),
        Line::from(Span::styled("  Links", header_style)),
        kb("g, l", "Open GitHub / LinkedIn"),
        kb("d", "Open resume"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("t", "Toggle light/dark theme"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(theme.name, key_style),
        ]),
    ]);

    let width = 50;
    let height = 31;
    let area = centered_rect(width, height, f.area());

    // Clear the area behind the modal
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.highlight))
                .border_type(theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 40, 20);
        let rect = centered_rect(50, 31, area);
        assert_eq!(rect, Rect::new(0, 0, 40, 20));

        let rect = centered_rect(20, 10, Rect::new(0, 0, 100, 40));
        assert_eq!(rect, Rect::new(40, 15, 20, 10));
    }
}
