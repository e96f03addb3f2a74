use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Widget};
use rust_i18n::t;

use crate::engine::session::GameSession;
use crate::ui::theme::Theme;

pub struct TimerBar<'a> {
    pub time_left: u32,
    pub total: u32,
    /// Reading phase: the bar stays full.
    pub frozen: bool,
    pub clutch: bool,
    pub theme: &'a Theme,
}

impl<'a> TimerBar<'a> {
    pub fn new(session: &GameSession, theme: &'a Theme) -> Self {
        Self {
            time_left: session.time_left(),
            total: session.round_time(),
            frozen: session.is_reading(),
            clutch: session.is_clutch(),
            theme,
        }
    }

    /// Fill ratio; bonuses can push the clock past the round's allotment.
    pub fn ratio(&self) -> f64 {
        if self.frozen || self.total == 0 {
            return 1.0;
        }
        (self.time_left as f64 / self.total as f64).clamp(0.0, 1.0)
    }
}

impl Widget for TimerBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let fill = if self.clutch {
            colors.error()
        } else {
            colors.bar_filled()
        };

        let mut title = format!(" {} ", t!("game.time", seconds = self.time_left));
        if self.clutch {
            title.push_str(&format!("{} ", t!("game.clutch")));
        }
        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(if self.clutch { fill } else { colors.border() }));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let filled_width = (self.ratio() * inner.width as f64).round() as u16;
        for x in inner.x..inner.x + inner.width {
            let style = if x < inner.x + filled_width {
                Style::default().bg(fill)
            } else {
                Style::default().bg(colors.bar_empty())
            };
            buf[(x, inner.y)].set_style(style);
        }

        let label = format!("{}s", self.time_left);
        let label_x = inner.x + (inner.width.saturating_sub(label.len() as u16)) / 2;
        buf.set_string(
            label_x,
            inner.y,
            &label,
            Style::default()
                .fg(colors.fg())
                .add_modifier(Modifier::BOLD),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(time_left: u32, total: u32, frozen: bool, theme: &Theme) -> TimerBar<'_> {
        TimerBar {
            time_left,
            total,
            frozen,
            clutch: false,
            theme,
        }
    }

    #[test]
    fn ratio_tracks_remaining_time() {
        let theme = Theme::default();
        assert_eq!(bar(30, 60, false, &theme).ratio(), 0.5);
        assert_eq!(bar(0, 60, false, &theme).ratio(), 0.0);
    }

    #[test]
    fn ratio_is_full_while_reading_and_clamped_after_bonuses() {
        let theme = Theme::default();
        assert_eq!(bar(10, 60, true, &theme).ratio(), 1.0);
        assert_eq!(bar(70, 60, false, &theme).ratio(), 1.0);
        assert_eq!(bar(5, 0, false, &theme).ratio(), 1.0);
    }

    #[test]
    fn renders_seconds_label() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        bar(42, 60, false, &theme).render(area, &mut buf);
        let row: String = (0..30).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("42s"));
    }
}
