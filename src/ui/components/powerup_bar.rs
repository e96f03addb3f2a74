use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Paragraph, Widget};
use rust_i18n::t;

use crate::engine::session::PowerupInventory;
use crate::ui::theme::Theme;

/// Trash on the left, reveal on the right, mirroring the arrow keys.
pub struct PowerupBar<'a> {
    pub inventory: PowerupInventory,
    pub active: bool,
    pub theme: &'a Theme,
}

impl Widget for PowerupBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let style_for = |count: u32| {
            if self.active && count > 0 {
                Style::default()
                    .fg(colors.warning())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text_dim())
            }
        };

        Paragraph::new(t!("game.trash", count = self.inventory.trash).to_string())
            .style(style_for(self.inventory.trash))
            .alignment(Alignment::Left)
            .render(halves[0], buf);
        Paragraph::new(t!("game.reveal", count = self.inventory.reveal).to_string())
            .style(style_for(self.inventory.reveal))
            .alignment(Alignment::Right)
            .render(halves[1], buf);
    }
}
