use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Row, Table, Widget};
use rust_i18n::t;

use crate::engine::ledger::HighScoreEntry;
use crate::engine::scoring;
use crate::ui::theme::Theme;

pub struct RankingTable<'a> {
    pub entries: &'a [HighScoreEntry],
    pub theme: &'a Theme,
}

impl Widget for RankingTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::bordered()
            .title(format!(" {} ", t!("ranking.title")))
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));

        if self.entries.is_empty() {
            Paragraph::new(vec![
                Line::from(""),
                Line::from(t!("ranking.empty").to_string()),
            ])
            .style(Style::default().fg(colors.text_dim()))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
            return;
        }

        let header = Row::new(vec![
            t!("ranking.rank").to_string(),
            t!("ranking.score").to_string(),
            t!("ranking.rank_title").to_string(),
            t!("ranking.mode").to_string(),
            t!("ranking.date").to_string(),
        ])
        .style(
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

        let rows: Vec<Row> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == 0 {
                    Style::default()
                        .fg(colors.warning())
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors.fg())
                };
                Row::new(vec![
                    format!("{}", i + 1),
                    entry.score.to_string(),
                    scoring::rank_title(entry.score).as_str().to_string(),
                    entry.mode.as_str().to_string(),
                    entry.date.format("%Y-%m-%d").to_string(),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(4),
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(6),
            Constraint::Min(10),
        ];
        Table::new(rows, widths)
            .header(header)
            .column_spacing(2)
            .block(block)
            .render(area, buf);
    }
}
