use crate::app::App;
use crate::ui::{checklist_list::render_checklist, footer::render_footer};
use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, app: &mut App) {
    let area  = f.area();
    let theme = app.theme.clone();

    // ── Root: header (2 lines) | list | footer ─────────────────────
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    // ── Header line 1: title + clock ───────────────────────────────
    let left  = format!(" Stellar Blade Collectibles Tracker — {} ", app.theme_variant.name());
    let right = format!(" {} ", Local::now().format("%H:%M:%S"));
    let pad = (area.width as usize)
        .saturating_sub(left.chars().count() + right.chars().count());

    let line1 = Line::from(vec![
        Span::styled(left, theme.title),
        Span::styled(" ".repeat(pad), theme.header),
        Span::styled(right, theme.text_dim),
    ]);

    // ── Header line 2: counter + filter + last save ────────────────
    let list = app.cans.list();
    let counter = format!(" {} Cans Collected ", app.cans.summary());
    let mut spans = vec![Span::styled(counter, theme.progress_style(list.collected(), list.len()))];
    if app.cans.show_uncollected_only() {
        spans.push(Span::styled(" [u: uncollected only] ", theme.warn));
    }
    if let Some(ts) = &app.last_saved {
        spans.push(Span::styled(format!("  saved {} ", ts), theme.text_dim));
    }

    f.render_widget(Paragraph::new(vec![line1, Line::from(spans)]), root[0]);

    // ── Checklist ──────────────────────────────────────────────────
    let rows = app.cans.visible();
    let title = format!(" Cans  ({} shown) ", rows.len());
    let inner = render_checklist(
        f,
        root[1],
        app.cans.list(),
        &rows,
        &mut app.can_list_state,
        title,
        "  Every can is collected.",
        &theme,
    );
    app.list_area = Some(inner);

    render_footer(f, root[2], &app.active_view, &theme);
}
