use crate::app::ActiveView;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_footer(f: &mut Frame, area: Rect, active_view: &ActiveView, theme: &Theme) {
    let base: &[(&str, &str)] = match active_view {
        ActiveView::Cans => &[
            ("q", "Quit"), ("↑↓/jk", "Select"), ("Space", "Toggle"), ("u", "Uncollected"),
            ("R", "Reset all"), ("S", "Skins"), ("t", "Theme"),
        ],
        ActiveView::Skins => &[
            ("Esc", "Close"), ("p", "Playthrough"), ("c", "Character"), ("L", "Load"),
            ("↑↓/jk", "Select"), ("Space", "Toggle"), ("u", "Uncollected"),
        ],
    };

    let mut spans: Vec<Span> = vec![Span::styled(" ", theme.footer_bg)];

    for (key, desc) in base {
        spans.push(Span::styled(format!(" {} ", key), theme.footer_key));
        spans.push(Span::styled(format!("{}  ", desc), theme.footer_text));
    }

    spans.push(Span::styled(" ? ", theme.footer_key));
    spans.push(Span::styled("Help  ", theme.footer_text));

    let para = Paragraph::new(Line::from(spans)).style(theme.footer_bg);
    f.render_widget(para, area);
}
