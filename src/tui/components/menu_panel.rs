// Compact navigation menu overlay
//
// Drops down under the nav bar. Its height follows the controller's
// visible fraction so opening and closing slide instead of popping.

use crate::navigation::Section;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Full height: one row per link plus borders
const PANEL_HEIGHT: u16 = Section::ALL.len() as u16 + 2;

/// `area` is the page area directly below the nav bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    if !app.menu.is_visible() {
        return;
    }

    let height = (PANEL_HEIGHT as f32 * app.menu.visible_fraction()).ceil() as u16;
    let height = height.min(area.height);
    if height == 0 {
        return;
    }
    let panel = Rect::new(area.x, area.y, area.width, height);

    let theme = app.theme();
    let selected = app.menu.is_open().then(|| app.menu.selected_section());
    let lines: Vec<Line> = Section::ALL
        .into_iter()
        .map(|section| {
            if Some(section) == selected {
                Line::from(Span::styled(
                    format!(" ▸ {} ", section.label()),
                    theme.selected_style(),
                ))
            } else {
                Line::from(Span::styled(
                    format!("   {} ", section.label()),
                    theme.muted_style(),
                ))
            }
        })
        .collect();

    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
        .border_type(theme.border_type)
        .border_style(theme.border_focused_style())
        .style(theme.base_style());

    f.render_widget(Clear, panel);
    f.render_widget(Paragraph::new(lines).block(block), panel);
}
