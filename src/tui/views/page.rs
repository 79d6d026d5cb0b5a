// Page composer
//
// Lays the portfolio out as one scrolling document of styled lines for a
// given width and palette. While composing it records the first line of
// every section into `SectionAnchors`; the navigator resolves jumps from
// those. Composition is pure, so the same inputs always give the same page.

use crate::contact::{ContactForm, Field, SubmissionStatus};
use crate::content::{Portfolio, Project, SkillGroup};
use crate::navigation::{Section, SectionAnchors};
use crate::theme::Theme;
use crate::tui::components::formatters::{pad_to_width, truncate_to_width, wrap_text};
use crate::tui::layout::Breakpoint;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Gap between grid columns
const COLUMN_GAP: usize = 3;

/// Minimum rows for the message box
const MESSAGE_ROWS: usize = 4;

/// Everything composition depends on
pub struct PageContext<'a> {
    pub content: &'a Portfolio,
    pub theme: &'a Theme,
    pub form: &'a ContactForm,
    pub focus: Option<Field>,
    /// Columns available for text
    pub width: usize,
    pub breakpoint: Breakpoint,
}

/// The laid-out document
pub struct ComposedPage {
    pub lines: Vec<Line<'static>>,
    pub anchors: SectionAnchors,
}

pub fn compose(ctx: &PageContext) -> ComposedPage {
    let mut page = PageBuilder::new(ctx.theme, ctx.width.max(20));

    compose_about(&mut page, ctx);
    compose_skills(&mut page, ctx);
    compose_projects(&mut page, ctx);
    compose_contact(&mut page, ctx);

    ComposedPage {
        lines: page.lines,
        anchors: page.anchors,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sections
// ─────────────────────────────────────────────────────────────────────────────

fn compose_about(page: &mut PageBuilder, ctx: &PageContext) {
    let theme = ctx.theme;
    let profile = &ctx.content.profile;

    page.anchor(Section::About);
    page.blank();
    page.push(Line::from(vec![
        Span::styled("● ", Style::default().fg(theme.success)),
        Span::styled(profile.badge.to_string(), theme.muted_style()),
    ]));
    page.blank();
    page.push(Line::from(vec![
        Span::styled(
            profile.headline.to_string(),
            theme.accent_style().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            profile.role.to_string(),
            Style::default()
                .fg(theme.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    page.push(Line::styled(profile.name.to_string(), theme.heading_style()));
    page.blank();
    page.paragraph(profile.summary, theme.muted_style(), 0);
    page.blank();
    page.push(Line::from(vec![
        Span::styled(" [p] View Projects ", theme.selected_style()),
        Span::raw("  "),
        Span::styled(" [d] Download Resume ", theme.badge_style()),
    ]));
    page.blank();
    page.push(socials_line(ctx));
    page.blank();
    page.blank();
}

fn compose_skills(page: &mut PageBuilder, ctx: &PageContext) {
    page.heading(Section::Skills, "Tech Stack");

    let columns = ctx.breakpoint.grid_columns();
    let col_width = if columns > 1 {
        (page.width - COLUMN_GAP * (columns - 1)) / columns
    } else {
        page.width
    };

    for row in ctx.content.skills.chunks(columns) {
        let cards: Vec<Vec<Vec<Span<'static>>>> = row
            .iter()
            .map(|group| skill_card(group, ctx.theme, col_width))
            .collect();
        let height = cards.iter().map(Vec::len).max().unwrap_or(0);

        for i in 0..height {
            let mut spans = Vec::new();
            for (col, card) in cards.iter().enumerate() {
                let cell = card.get(i).cloned().unwrap_or_default();
                let used = spans_width(&cell);
                spans.extend(cell);
                if col + 1 < cards.len() {
                    let fill = col_width.saturating_sub(used) + COLUMN_GAP;
                    spans.push(Span::raw(" ".repeat(fill)));
                }
            }
            page.push(Line::from(spans));
        }
        page.blank();
    }
    page.blank();
}

fn compose_projects(page: &mut PageBuilder, ctx: &PageContext) {
    let theme = ctx.theme;
    page.heading(Section::Projects, "Projects");
    page.paragraph(ctx.content.projects_intro, theme.muted_style(), 0);
    page.blank();

    for project in ctx.content.projects {
        project_card(page, project, theme);
    }

    let github = format!("[g] View all on GitHub  ↗ {}", ctx.content.github_profile);
    page.push(Line::styled(
        truncate_to_width(&github, page.width),
        theme.accent_style().add_modifier(Modifier::BOLD),
    ));
    page.blank();
    page.blank();
}

fn compose_contact(page: &mut PageBuilder, ctx: &PageContext) {
    let theme = ctx.theme;
    let profile = &ctx.content.profile;

    page.heading(Section::Contact, "Get In Touch");
    page.paragraph(ctx.content.contact_intro, theme.muted_style(), 0);
    page.blank();

    page.push(Line::styled("✉ Email Me", theme.heading_style()));
    page.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(profile.email.to_string(), theme.accent_style()),
        Span::styled("  [y] copy", Style::default().fg(theme.subtle)),
    ]));
    page.push(Line::styled("◎ Availability", theme.heading_style()));
    page.push(Line::styled(
        format!("  {}", profile.availability),
        theme.muted_style(),
    ));
    page.push(Line::styled("Connect on Socials", theme.heading_style()));
    let mut socials = socials_line(ctx);
    socials.spans.insert(0, Span::raw("  "));
    page.push(socials);
    page.blank();

    compose_form(page, ctx);
    page.blank();
}

fn compose_form(page: &mut PageBuilder, ctx: &PageContext) {
    let theme = ctx.theme;
    let box_width = page.width.min(72);

    for field in Field::INPUTS {
        let focused = ctx.focus == Some(field);
        let label = if focused {
            Line::styled(
                format!("▸ {}", field.label()),
                theme.accent_style().add_modifier(Modifier::BOLD),
            )
        } else {
            Line::styled(format!("  {}", field.label()), theme.muted_style())
        };
        page.push(label);

        for row in input_rows(ctx.form.value(field), field, focused, box_width) {
            let (text, style) = match row {
                InputRow::Value(text) => (text, Style::default().fg(theme.foreground)),
                InputRow::Placeholder(text) => (
                    text,
                    Style::default()
                        .fg(theme.subtle)
                        .add_modifier(Modifier::ITALIC),
                ),
            };
            let edge = if focused {
                theme.border_focused_style()
            } else {
                theme.border_style()
            };
            page.push(Line::from(vec![
                Span::styled("│", edge),
                Span::styled(
                    pad_to_width(&format!(" {}", text), box_width.saturating_sub(1)),
                    style.bg(theme.input_bg),
                ),
            ]));
        }
        page.blank();
    }

    let status = ctx.form.status();
    let button_style = match status {
        SubmissionStatus::Sending => Style::default()
            .fg(theme.subtle)
            .bg(theme.input_bg)
            .add_modifier(Modifier::DIM),
        _ if ctx.focus == Some(Field::Submit) => theme.selected_style(),
        SubmissionStatus::Success => theme.success_style().bg(theme.input_bg),
        SubmissionStatus::Error => theme.error_style().bg(theme.input_bg),
        SubmissionStatus::Idle => theme.accent_style().bg(theme.input_bg),
    };
    page.push(Line::from(Span::styled(
        format!("  {}  ", status.button_label()),
        button_style,
    )));

    let hint = if ctx.focus.is_some() {
        "Tab next · Shift-Tab back · Ctrl-S send · Esc done"
    } else if ctx.form.is_empty() {
        "[i] write a message"
    } else {
        "[i] continue your message"
    };
    page.push(Line::styled(
        truncate_to_width(hint, page.width),
        Style::default().fg(theme.subtle),
    ));
}

// ─────────────────────────────────────────────────────────────────────────────
// Pieces
// ─────────────────────────────────────────────────────────────────────────────

fn socials_line(ctx: &PageContext) -> Line<'static> {
    let mut spans = Vec::new();
    for link in ctx.content.socials {
        let key = link.label.chars().next().unwrap_or(' ').to_ascii_lowercase();
        spans.push(Span::styled(
            format!("[{}] ", key),
            Style::default().fg(ctx.theme.subtle),
        ));
        spans.push(Span::styled(link.label.to_string(), ctx.theme.accent_style()));
        spans.push(Span::raw("   "));
    }
    spans.pop();
    Line::from(spans)
}

fn skill_card(group: &SkillGroup, theme: &Theme, width: usize) -> Vec<Vec<Span<'static>>> {
    let mut lines = vec![vec![
        Span::styled(group.icon.to_string(), theme.accent_style()),
        Span::raw(" "),
        Span::styled(group.title.to_string(), theme.heading_style()),
    ]];
    lines.extend(chip_rows(group.skills, theme, width));
    lines
}

fn project_card(page: &mut PageBuilder, project: &Project, theme: &Theme) {
    page.push(Line::styled(
        project.kind.to_uppercase(),
        Style::default()
            .fg(theme.accent_alt)
            .add_modifier(Modifier::BOLD),
    ));
    page.push(Line::styled(project.title.to_string(), theme.heading_style()));
    page.paragraph(project.description, theme.muted_style(), 0);
    for row in chip_rows(project.tech, theme, page.width) {
        page.push(Line::from(row));
    }
    for feature in project.visible_features() {
        page.bullet(feature, Style::default().fg(theme.foreground));
    }
    page.push(Line::styled(
        truncate_to_width(&format!("↗ {}", project.repository), page.width),
        theme.accent_style(),
    ));
    page.push(Line::styled("─".repeat(page.width), theme.border_style()));
    page.blank();
}

/// Badge chips flowed into rows no wider than `width`
fn chip_rows(items: &[&str], theme: &Theme, width: usize) -> Vec<Vec<Span<'static>>> {
    let mut rows = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;

    for item in items {
        let chip = format!(" {} ", item);
        let w = chip.width();
        if !row.is_empty() && used + 1 + w > width {
            rows.push(std::mem::take(&mut row));
            used = 0;
        }
        if !row.is_empty() {
            row.push(Span::raw(" "));
            used += 1;
        }
        row.push(Span::styled(chip, theme.badge_style()));
        used += w;
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

enum InputRow {
    Value(String),
    Placeholder(String),
}

/// Visible rows of one input box
fn input_rows(value: &str, field: Field, focused: bool, width: usize) -> Vec<InputRow> {
    let inner = width.saturating_sub(3).max(1);
    let cursor = if focused { "▏" } else { "" };

    if value.is_empty() {
        let mut rows = vec![if focused {
            InputRow::Value(cursor.to_string())
        } else {
            InputRow::Placeholder(truncate_to_width(field.placeholder(), inner))
        }];
        if field.is_multiline() {
            rows.resize_with(MESSAGE_ROWS, || InputRow::Value(String::new()));
        }
        return rows;
    }

    if !field.is_multiline() {
        // Keep the tail visible while typing past the edge
        let shown = format!("{}{}", value, cursor);
        let text = if shown.width() > inner {
            let skip = shown.chars().count().saturating_sub(inner);
            shown.chars().skip(skip).collect()
        } else {
            shown
        };
        return vec![InputRow::Value(text)];
    }

    let mut rows: Vec<InputRow> = value
        .split('\n')
        .flat_map(|para| wrap_text(para, inner))
        .map(InputRow::Value)
        .collect();
    if let Some(InputRow::Value(last)) = rows.last_mut() {
        last.push_str(cursor);
    }
    while rows.len() < MESSAGE_ROWS {
        rows.push(InputRow::Value(String::new()));
    }
    rows
}

fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| s.content.width()).sum()
}

// ─────────────────────────────────────────────────────────────────────────────
// Builder
// ─────────────────────────────────────────────────────────────────────────────

struct PageBuilder<'a> {
    theme: &'a Theme,
    width: usize,
    lines: Vec<Line<'static>>,
    anchors: SectionAnchors,
}

impl<'a> PageBuilder<'a> {
    fn new(theme: &'a Theme, width: usize) -> Self {
        Self {
            theme,
            width,
            lines: Vec::new(),
            anchors: SectionAnchors::new(),
        }
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::raw(""));
    }

    /// Mark the next line as the top of `section`
    fn anchor(&mut self, section: Section) {
        self.anchors.insert(section, self.lines.len());
    }

    fn heading(&mut self, section: Section, title: &str) {
        self.anchor(section);
        self.push(Line::from(vec![
            Span::styled("# ", self.theme.accent_style()),
            Span::styled(title.to_string(), self.theme.heading_style()),
        ]));
        self.push(Line::styled(
            "─".repeat(title.width() + 2),
            self.theme.accent_style(),
        ));
        self.blank();
    }

    fn paragraph(&mut self, text: &str, style: Style, indent: usize) {
        let pad = " ".repeat(indent);
        for line in wrap_text(text, self.width.saturating_sub(indent)) {
            self.lines.push(Line::styled(format!("{}{}", pad, line), style));
        }
    }

    /// Bullet with a hanging indent
    fn bullet(&mut self, text: &str, style: Style) {
        let wrapped = wrap_text(text, self.width.saturating_sub(4));
        for (i, line) in wrapped.into_iter().enumerate() {
            let marker = if i == 0 { "  • " } else { "    " };
            self.lines.push(Line::from(vec![
                Span::styled(marker, self.theme.accent_style()),
                Span::styled(line, style),
            ]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;

    fn compose_at(form: &ContactForm, focus: Option<Field>, width: usize) -> ComposedPage {
        let theme = Theme::dark();
        compose(&PageContext {
            content: &PORTFOLIO,
            theme: &theme,
            form,
            focus,
            width,
            breakpoint: Breakpoint::from_width(width as u16),
        })
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn contains(page: &ComposedPage, needle: &str) -> bool {
        page.lines.iter().any(|l| text(l).contains(needle))
    }

    #[test]
    fn anchors_follow_document_order() {
        let page = compose_at(&ContactForm::new(), None, 80);
        let lines: Vec<usize> = Section::ALL
            .iter()
            .map(|s| page.anchors.get(*s).unwrap())
            .collect();

        assert_eq!(lines[0], 0);
        assert!(lines.windows(2).all(|w| w[0] < w[1]), "{:?}", lines);
        assert!(text(&page.lines[lines[2]]).contains("Projects"));
        assert!(text(&page.lines[lines[3]]).contains("Get In Touch"));
    }

    #[test]
    fn project_cards_show_three_features() {
        let page = compose_at(&ContactForm::new(), None, 100);
        assert!(contains(&page, "Redis Cache-Aside pattern"));
        assert!(!contains(&page, "Cache invalidation"));
        assert!(!contains(&page, "NotificationService simulation"));
        assert!(!contains(&page, "Global exception handling"));
        assert!(contains(&page, "View all on GitHub"));
    }

    #[test]
    fn empty_form_shows_placeholders() {
        let page = compose_at(&ContactForm::new(), None, 80);
        assert!(contains(&page, "John Doe"));
        assert!(contains(&page, "john@example.com"));
        assert!(contains(&page, "Hi, I'd like to discuss a project..."));
        assert!(contains(&page, "Send Message"));
    }

    #[test]
    fn typed_values_replace_placeholders() {
        let mut form = ContactForm::new();
        form.set_value(Field::Name, "Jane Doe");
        let page = compose_at(&form, None, 80);
        assert!(contains(&page, "Jane Doe"));
        assert!(!contains(&page, "John Doe"));
    }

    #[test]
    fn button_label_tracks_status() {
        let mut form = ContactForm::new();
        form.set_value(Field::Name, "Jane");
        form.set_value(Field::Email, "jane@example.com");
        form.set_value(Field::Message, "Hello");
        form.begin_submit();

        let page = compose_at(&form, None, 80);
        assert!(contains(&page, "Sending..."));
        assert!(!contains(&page, "Send Message"));
    }

    #[test]
    fn wide_layout_puts_skill_cards_side_by_side() {
        let wide = compose_at(&ContactForm::new(), None, 110);
        assert!(wide
            .lines
            .iter()
            .any(|l| text(l).contains("Languages") && text(l).contains("Frameworks")));

        let narrow = compose_at(&ContactForm::new(), None, 70);
        assert!(!narrow
            .lines
            .iter()
            .any(|l| text(l).contains("Languages") && text(l).contains("Frameworks")));
    }

    #[test]
    fn message_box_keeps_newlines() {
        let mut form = ContactForm::new();
        form.set_value(Field::Message, "first\nsecond");
        let page = compose_at(&form, Some(Field::Message), 80);
        assert!(contains(&page, "first"));
        assert!(contains(&page, "second▏"));
    }
}
