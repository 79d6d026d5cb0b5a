// Navigation bar component
//
// Brand on the left. Wide enough layouts get inline section links, the
// resume action and the theme indicator on the right; compact layouts get
// a menu button in their place.

use crate::navigation::Section;
use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border_style())
        .style(theme.base_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let right = right_side(app);
    let right_width = right.width() as u16;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(right_width + 1)])
        .split(inner);

    // "Vansh.java": stem in the heading color, extension in accent
    let handle = app.content.profile.handle;
    let (stem, ext) = match handle.find('.') {
        Some(i) => handle.split_at(i),
        None => (handle, ""),
    };
    let brand = Line::from(vec![
        Span::raw(" "),
        Span::styled(stem, theme.heading_style()),
        Span::styled(ext, theme.accent_style().add_modifier(Modifier::BOLD)),
    ]);
    f.render_widget(Paragraph::new(brand), chunks[0]);
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), chunks[1]);
}

fn right_side(app: &App) -> Line<'static> {
    let theme = app.theme();
    let key = Style::default().fg(theme.subtle);
    let mut spans = Vec::new();

    if app.breakpoint.shows_inline_nav() {
        let current = app.current_section();
        for (i, section) in Section::ALL.into_iter().enumerate() {
            let style = if section == current {
                theme.accent_style().add_modifier(Modifier::BOLD)
            } else {
                theme.muted_style()
            };
            spans.push(Span::styled(format!("{}:", i + 1), key));
            spans.push(Span::styled(section.label().to_string(), style));
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled("d:", key));
        spans.push(Span::styled("Resume", theme.muted_style()));
        spans.push(Span::raw("  "));
    } else {
        let label = if app.menu.is_open() { "✕ Close" } else { "≡ Menu" };
        spans.push(Span::styled("m:", key));
        spans.push(Span::styled(label, theme.accent_style()));
        spans.push(Span::raw("  "));
    }

    let icon = if app.prefs.context().is_dark() { "☾" } else { "☀" };
    spans.push(Span::styled("t:", key));
    spans.push(Span::styled(icon, theme.accent_style()));
    spans.push(Span::raw(" "));
    Line::from(spans)
}
