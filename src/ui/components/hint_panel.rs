use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::engine::difficulty::Difficulty;
use crate::engine::selection::RoundQuestion;
use crate::ui::theme::Theme;

pub fn difficulty_label(level: Difficulty) -> String {
    match level {
        Difficulty::Easy => t!("difficulty.easy").to_string(),
        Difficulty::Medium => t!("difficulty.medium").to_string(),
        Difficulty::Hard => t!("difficulty.hard").to_string(),
    }
}

pub struct HintPanel<'a> {
    pub round: &'a RoundQuestion,
    pub theme: &'a Theme,
}

impl Widget for HintPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let difficulty_color = match self.round.difficulty {
            Difficulty::Easy => colors.success(),
            Difficulty::Medium => colors.warning(),
            Difficulty::Hard => colors.error(),
        };

        let block = Block::bordered()
            .title(Line::from(vec![
                Span::styled(
                    format!(" {} ", t!("game.hint")),
                    Style::default().fg(colors.accent()),
                ),
                Span::styled(
                    format!("{} ", difficulty_label(self.round.difficulty)),
                    Style::default().fg(difficulty_color),
                ),
            ]))
            .border_style(Style::default().fg(colors.border()));

        Paragraph::new(self.round.question.hint.as_str())
            .style(Style::default().fg(colors.fg()))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
