use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::ui::theme::Theme;

pub struct About<'a> {
    pub question_count: usize,
    pub theme: &'a Theme,
}

impl Widget for About<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::bordered()
            .title(format!(" {} ", t!("about.title")))
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));

        let body = Style::default().fg(colors.fg());
        let lines = vec![
            Line::from(Span::styled(
                format!("{} v{}", t!("app.title"), env!("CARGO_PKG_VERSION")),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(t!("about.line1").to_string(), body)),
            Line::from(""),
            Line::from(Span::styled(t!("about.line2").to_string(), body)),
            Line::from(""),
            Line::from(Span::styled(t!("about.line3").to_string(), body)),
            Line::from(""),
            Line::from(Span::styled(t!("about.line4").to_string(), body)),
            Line::from(""),
            Line::from(Span::styled(
                t!("about.questions", count = self.question_count).to_string(),
                Style::default().fg(colors.text_dim()),
            )),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
