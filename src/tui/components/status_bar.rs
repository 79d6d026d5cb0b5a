// Status bar component
//
// Current section on the left, context-sensitive key hints on the right.

use crate::contact::SubmissionStatus;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let bp = Breakpoint::from_width(area.width);

    let hints = if app.focus.is_some() {
        if bp.at_least(Breakpoint::Wide) {
            "Tab next field │ Shift-Tab back │ Ctrl-S send │ Esc leave form"
        } else {
            "Tab │ Ctrl-S send │ Esc"
        }
    } else if app.menu.is_open() {
        "↑↓ select │ Enter go │ Esc close"
    } else if bp.at_least(Breakpoint::Wide) {
        "↑↓ scroll │ 1-4 jump │ i message │ y copy email │ t theme │ ? help │ q quit"
    } else {
        "↑↓ │ 1-4 │ t theme │ ? help │ q"
    };

    let mut spans = vec![
        Span::styled(" § ", theme.accent_style()),
        Span::styled(app.current_section().id(), theme.muted_style()),
    ];
    match app.form.status() {
        SubmissionStatus::Sending => {
            spans.push(Span::styled("  ✉ sending…", theme.muted_style()));
        }
        SubmissionStatus::Error if bp.at_least(Breakpoint::Normal) => {
            spans.push(Span::styled("  ✉ send failed", theme.error_style()));
        }
        _ => {}
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(hints, Style::default().fg(theme.subtle)));

    let status = Paragraph::new(Line::from(spans))
        .style(theme.base_style())
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(theme.border_style()),
        );

    f.render_widget(status, area);
}
