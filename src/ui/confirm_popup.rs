use crate::app::Popup;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, popup: &Popup, theme: &Theme) {
    let (title, lines, height) = match popup {
        Popup::None => return,

        Popup::ConfirmReset => (
            " Reset ",
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("  Are you sure you want to reset all progress?", theme.text),
                ]),
                Line::from(""),
                Line::from(vec![
                    Span::styled("  y ", theme.footer_key),
                    Span::styled(" Yes   ", theme.text_dim),
                    Span::styled(" n ", theme.footer_key),
                    Span::styled(" No", theme.text_dim),
                ]),
            ],
            7,
        ),

        Popup::Error(msg) => (
            " Error ",
            vec![
                Line::from(""),
                Line::from(vec![Span::styled(format!("  {}", msg), theme.crit)]),
                Line::from(""),
                Line::from(vec![
                    Span::styled("  Press any key to dismiss", theme.text_dim),
                ]),
            ],
            9,
        ),
    };

    let area = centered_rect(56, height, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused)
        .title(Span::styled(title, theme.title));

    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let w = width.min(r.width);
    let h = height.min(r.height);
    Rect::new(
        r.x + (r.width.saturating_sub(w)) / 2,
        r.y + (r.height.saturating_sub(h)) / 2,
        w, h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_capped_by_screen() {
        let screen = Rect::new(0, 0, 40, 5);
        assert_eq!(centered_rect(56, 7, screen), Rect::new(0, 0, 40, 5));
        assert_eq!(centered_rect(20, 3, Rect::new(0, 0, 40, 9)), Rect::new(10, 3, 20, 3));
    }
}
