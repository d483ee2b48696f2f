use crate::app::App;
use crate::models::catalog::{Playthrough, CHARACTERS};
use crate::ui::{checklist_list::render_checklist, footer::render_footer, theme::Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &mut App) {
    let area  = f.area();
    let theme = app.theme.clone();

    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_footer(f, root[3], &app.active_view, &theme);

    let Some(window) = app.skins.as_mut() else {
        app.list_area = None;
        return;
    };

    // ── Selectors ──────────────────────────────────────────────────
    let selectors = vec![
        selector_line(
            "Select Playthrough:",
            Playthrough::ALL.iter().map(|p| p.label()),
            window.playthrough.label(),
            "p",
            &theme,
        ),
        selector_line(
            "Select Character: ",
            CHARACTERS.iter().copied(),
            window.character(),
            "c",
            &theme,
        ),
        Line::from(vec![
            Span::styled(" L ", theme.footer_key),
            Span::styled(" Load Skins", theme.text),
        ]),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(Span::styled(" Skin Tracker ", theme.title));
    f.render_widget(Paragraph::new(selectors).block(block), root[0]);

    // ── Status line: loaded context, counter, filter ───────────────
    let tracker = &window.tracker;
    let mut spans = Vec::new();
    match tracker.context() {
        Some((character, playthrough)) => {
            let list = tracker.list();
            spans.push(Span::styled(
                format!(" {} · {}  ", character, playthrough.label()),
                theme.title,
            ));
            spans.push(Span::styled(
                format!("{} Skins Collected ", tracker.summary()),
                theme.progress_style(list.collected(), list.len()),
            ));
        }
        None => spans.push(Span::styled(" Nothing loaded yet ", theme.text_dim)),
    }
    if tracker.show_uncollected_only() {
        spans.push(Span::styled(" [u: uncollected only] ", theme.warn));
    }
    if let Some(ts) = &app.last_saved {
        spans.push(Span::styled(format!("  saved {} ", ts), theme.text_dim));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), root[1]);

    // ── Checklist ──────────────────────────────────────────────────
    let rows = tracker.visible();
    let empty_hint = if tracker.context().is_none() {
        "  Pick a playthrough and character, then press L."
    } else if tracker.list().is_empty() {
        "  No outfits listed for this combination."
    } else {
        "  Every outfit here is collected."
    };
    let inner = render_checklist(
        f,
        root[2],
        window.tracker.list(),
        &rows,
        &mut window.list_state,
        format!(" Outfits  ({} shown) ", rows.len()),
        empty_hint,
        &theme,
    );
    app.list_area = Some(inner);
}

/// `Label:  A  [B]  C   (key)` with the current choice highlighted.
fn selector_line<'a>(
    label: &'a str,
    options: impl Iterator<Item = &'a str>,
    current: &str,
    key: &'a str,
    theme: &Theme,
) -> Line<'a> {
    let mut spans = vec![Span::styled(format!(" {} ", label), theme.text)];
    for opt in options {
        if opt == current {
            spans.push(Span::styled(format!(" {} ", opt), theme.selected));
        } else {
            spans.push(Span::styled(format!(" {} ", opt), theme.text_dim));
        }
    }
    spans.push(Span::styled(format!("   {} ", key), theme.footer_key));
    spans.push(Span::styled(" cycle", theme.text_dim));
    Line::from(spans)
}
