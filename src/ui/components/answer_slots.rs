use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use rust_i18n::t;

use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Shown(char),
    Hidden,
    /// Hidden letter exposed after a loss.
    Missed(char),
    /// Space the player still has to press.
    OpenSpace,
    Gap,
}

/// Maps answer positions to what the board shows. A space becomes a plain gap
/// once guessed or when the answer is exposed.
pub fn slots(answer: &[char], revealed: &[Option<char>], expose: bool) -> Vec<Slot> {
    answer
        .iter()
        .zip(revealed)
        .map(|(&ch, shown)| match (ch, shown) {
            (' ', None) if !expose => Slot::OpenSpace,
            (' ', _) => Slot::Gap,
            (_, Some(c)) => Slot::Shown(*c),
            (c, None) if expose => Slot::Missed(c),
            (_, None) => Slot::Hidden,
        })
        .collect()
}

pub struct AnswerSlots<'a> {
    pub slots: Vec<Slot>,
    pub theme: &'a Theme,
}

impl Widget for AnswerSlots<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::bordered()
            .title(format!(" {} ", t!("game.answer")))
            .border_style(Style::default().fg(colors.border()));

        let inner_width = area.width.saturating_sub(2) as usize;
        // Two columns per slot when it fits, otherwise packed.
        let spacer = if self.slots.len() * 2 <= inner_width { " " } else { "" };

        let spans: Vec<Span> = self
            .slots
            .iter()
            .flat_map(|slot| {
                let cell = match *slot {
                    Slot::Shown(c) => Span::styled(
                        c.to_string(),
                        Style::default()
                            .fg(colors.accent())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Slot::Hidden => Span::styled("_", Style::default().fg(colors.slot_empty())),
                    Slot::Missed(c) => Span::styled(
                        c.to_string(),
                        Style::default()
                            .fg(colors.error())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Slot::OpenSpace => {
                        Span::styled("␣", Style::default().fg(colors.slot_empty()))
                    }
                    Slot::Gap => Span::raw(" "),
                };
                [cell, Span::raw(spacer)]
            })
            .collect();

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
