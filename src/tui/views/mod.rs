// Views module - screen-level rendering logic
//
// One screen: nav bar, the scrolling page, status bar, plus overlays
// (compact menu, modal, toast) stacked on top in that order.

mod modal;
pub mod page;

use super::app::App;
use super::layout::{Breakpoint, MAX_CONTENT_WIDTH};
use crate::tui::components::{self, scrollbar};
use page::{ComposedPage, PageContext};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

/// Horizontal padding inside the page column
const PAGE_PADDING: u16 = 2;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    app.set_breakpoint(Breakpoint::from_width(area.width));

    let bg_block = Block::default().style(app.theme().base_style());
    f.render_widget(bg_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(area);

    components::nav_bar::render(f, chunks[0], app);
    render_page(f, chunks[1], app);
    components::status_bar::render(f, chunks[2], app);
    components::menu_panel::render(f, chunks[1], app);

    if let Some(ref modal_state) = app.modal {
        modal::render(f, modal_state, app);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, area, app.theme());
    }

    // Clear expired toast after render
    app.clear_expired_toast();
}

/// Compose the page for this frame's width and show the visible slice
fn render_page(f: &mut Frame, area: Rect, app: &mut App) {
    let column = content_column(area);
    let text_width = column.width.saturating_sub(PAGE_PADDING * 2 + 1);
    let text_area = Rect::new(
        column.x + PAGE_PADDING,
        column.y,
        text_width,
        column.height,
    );

    let ComposedPage { lines, anchors } = page::compose(&PageContext {
        content: app.content,
        theme: app.theme(),
        form: &app.form,
        focus: app.focus,
        width: text_width as usize,
        breakpoint: app.breakpoint,
    });

    app.navigator.set_anchors(anchors);
    app.scroll
        .update_dimensions(lines.len(), text_area.height as usize);

    let (start, end) = app.scroll.visible_range();
    let visible: Vec<_> = lines
        .into_iter()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect();

    f.render_widget(
        Paragraph::new(visible).style(app.theme().base_style()),
        text_area,
    );
    scrollbar::render_scrollbar(f, column, &app.scroll, app.theme());
}

/// Page column: full width up to the cap, centered beyond it
fn content_column(area: Rect) -> Rect {
    if area.width <= MAX_CONTENT_WIDTH {
        return area;
    }
    let margin = (area.width - MAX_CONTENT_WIDTH) / 2;
    Rect::new(area.x + margin, area.y, MAX_CONTENT_WIDTH, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_column_caps_and_centers() {
        let narrow = Rect::new(0, 2, 80, 30);
        assert_eq!(content_column(narrow), narrow);

        let wide = Rect::new(0, 2, 200, 30);
        assert_eq!(content_column(wide), Rect::new(40, 2, 120, 30));
    }
}
