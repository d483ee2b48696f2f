use crate::models::checklist::{Checklist, ItemKey};
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the visible rows of a checklist as `[x] name` lines.
///
/// `rows` are catalog indices in display order; the list state selects
/// among rows, not catalog indices. Returns the inner area the rows were
/// drawn in, for mouse hit-testing.
pub fn render_checklist<K: ItemKey>(
    f: &mut Frame,
    area: Rect,
    list: &Checklist<K>,
    rows: &[usize],
    state: &mut ListState,
    title: String,
    empty_hint: &str,
    theme: &Theme,
) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused)
        .title(Span::styled(title, theme.title));
    let inner = block.inner(area);

    let items: Vec<ListItem> = if rows.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(empty_hint.to_string(), theme.text_dim)))]
    } else {
        rows.iter().map(|&i| row(list, i, theme)).collect()
    };

    let widget = List::new(items)
        .block(block)
        .highlight_style(theme.selected)
        .highlight_symbol("▶ ");

    f.render_stateful_widget(widget, area, state);
    inner
}

fn row<K: ItemKey>(list: &Checklist<K>, idx: usize, theme: &Theme) -> ListItem<'static> {
    let label = list.item(idx).map(|k| k.label().to_string()).unwrap_or_default();
    let spans = if list.is_collected(idx) {
        vec![
            Span::styled("[x] ", theme.checked),
            Span::styled(label, theme.text_dim),
        ]
    } else {
        vec![
            Span::styled("[ ] ", theme.text),
            Span::styled(label, theme.text),
        ]
    };
    ListItem::new(Line::from(spans))
}
