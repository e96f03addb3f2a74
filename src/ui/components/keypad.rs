use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Widget};
use rust_i18n::t;

use crate::engine::keyboard::{KeyStatus, KeyboardKey};
use crate::ui::layout::{KEYPAD_COLUMNS, keypad_cell};
use crate::ui::theme::Theme;

pub fn key_label(ch: char) -> String {
    match ch {
        ' ' => "␣".to_string(),
        c => c.to_string(),
    }
}

pub struct Keypad<'a> {
    pub keys: &'a [KeyboardKey],
    /// Whether the board takes guesses at all (false while reading or after the round).
    pub active: bool,
    pub theme: &'a Theme,
}

impl Widget for Keypad<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::bordered()
            .title(format!(" {} ", t!("game.keypad")))
            .border_style(Style::default().fg(if self.active {
                colors.border_focused()
            } else {
                colors.border()
            }));
        let inner = block.inner(area);
        block.render(area, buf);

        for (i, key) in self.keys.iter().enumerate() {
            let cell = keypad_cell(inner, i, KEYPAD_COLUMNS);
            if cell.height == 0 || cell.width == 0 {
                continue;
            }
            let style = match key.status {
                KeyStatus::Idle if self.active => Style::default()
                    .fg(colors.key_idle())
                    .add_modifier(Modifier::BOLD),
                KeyStatus::Idle => Style::default().fg(colors.text_dim()),
                KeyStatus::Correct => Style::default()
                    .fg(colors.bg())
                    .bg(colors.key_correct())
                    .add_modifier(Modifier::BOLD),
                KeyStatus::Wrong => Style::default()
                    .fg(colors.key_wrong())
                    .add_modifier(Modifier::CROSSED_OUT),
                KeyStatus::Disabled => Style::default().fg(colors.key_disabled()),
            };
            let text = match key.status {
                KeyStatus::Disabled => "·".to_string(),
                _ => format!("[ {} ]", key_label(key.ch)),
            };
            Paragraph::new(text)
                .style(style)
                .alignment(Alignment::Center)
                .render(cell, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_key_has_visible_label() {
        assert_eq!(key_label(' '), "␣");
        assert_eq!(key_label('Q'), "Q");
    }

    #[test]
    fn renders_keys_in_rows() {
        let theme = Theme::default();
        let keys: Vec<KeyboardKey> = "ABCDEFG".chars().map(KeyboardKey::new).collect();
        let area = Rect::new(0, 0, 52, 7);
        let mut buf = Buffer::empty(area);
        Keypad {
            keys: &keys,
            active: true,
            theme: &theme,
        }
        .render(area, &mut buf);
        let first: String = (0..52).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        let second: String = (0..52).map(|x| buf[(x, 3)].symbol().to_string()).collect();
        assert!(first.contains("[ A ]") && first.contains("[ E ]"));
        assert!(second.contains("[ F ]") && second.contains("[ G ]"));
    }
}
