use crate::ui::confirm_popup::centered_rect;
use crate::ui::theme::Theme;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, theme: &Theme) {
    let area = centered_rect(60, 26, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused)
        .title(Span::styled(" sbtrack — Keybindings (? or F1 to close) ", theme.title));

    let lines = vec![
        key_line(theme, "Global", ""),
        key_line(theme, "  q / Ctrl-C",     "Quit"),
        key_line(theme, "  ↑↓ / j k",      "Select"),
        key_line(theme, "  PageUp/Dn",      "Move ten rows"),
        key_line(theme, "  g / G",          "Jump first / last"),
        key_line(theme, "  Space / Enter",  "Toggle collected"),
        key_line(theme, "  u",              "Show uncollected only"),
        key_line(theme, "  t",              "Cycle color theme"),
        key_line(theme, "  ? / F1",         "Toggle this help"),
        Line::from(""),
        key_line(theme, "Cans", ""),
        key_line(theme, "  R",  "Reset all progress (asks y/n)"),
        key_line(theme, "  S",  "Open skin tracker"),
        Line::from(""),
        key_line(theme, "Skin tracker", ""),
        key_line(theme, "  p",   "Cycle playthrough (NG / NG+ / DLC)"),
        key_line(theme, "  c",   "Cycle character (Eve / Lily / Adam)"),
        key_line(theme, "  L",   "Load skins for the selection"),
        key_line(theme, "  Esc", "Close skin tracker"),
        Line::from(""),
        key_line(theme, "Mouse", ""),
        key_line(theme, "  Click",         "Select row"),
        key_line(theme, "  Click (sel'd)", "Toggle collected"),
        key_line(theme, "  Scroll",        "Move selection"),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn key_line<'a>(theme: &Theme, key: &'a str, desc: &'a str) -> Line<'a> {
    if desc.is_empty() {
        // Section header
        Line::from(vec![
            Span::styled(key, theme.title),
        ])
    } else {
        Line::from(vec![
            Span::styled(format!("{:<18}", key), theme.footer_key),
            Span::styled(desc, theme.text_dim),
        ])
    }
}
