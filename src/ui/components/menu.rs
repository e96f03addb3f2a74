use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use rust_i18n::t;

use crate::app::{MENU_ITEMS, MenuItem};
use crate::engine::filter::{ALL_MODES, FilterMode};
use crate::ui::theme::Theme;

pub fn item_label(item: MenuItem) -> String {
    match item {
        MenuItem::Start => t!("menu.start").to_string(),
        MenuItem::Ranking => t!("menu.ranking").to_string(),
        MenuItem::About => t!("menu.about").to_string(),
        MenuItem::Quit => t!("menu.quit").to_string(),
    }
}

pub fn filter_label(mode: FilterMode) -> String {
    match mode {
        FilterMode::Mix => t!("filter.mix").to_string(),
        FilterMode::Hum => t!("filter.hum").to_string(),
        FilterMode::Nat => t!("filter.nat").to_string(),
        FilterMode::Lin => t!("filter.lin").to_string(),
    }
}

/// Start screen: title, filter selector, menu entries and the best score.
pub struct StartMenu<'a> {
    pub selected: usize,
    pub filter: FilterMode,
    pub best: Option<u32>,
    pub theme: &'a Theme,
}

impl<'a> StartMenu<'a> {
    pub fn new(selected: usize, filter: FilterMode, best: Option<u32>, theme: &'a Theme) -> Self {
        Self {
            selected,
            filter,
            best,
            theme,
        }
    }
}

impl Widget for &StartMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let title_lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                t!("app.title").to_string(),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                t!("app.subtitle").to_string(),
                Style::default().fg(colors.text_dim()),
            )),
        ];
        Paragraph::new(title_lines)
            .alignment(Alignment::Center)
            .render(layout[0], buf);

        let mut mode_spans = Vec::new();
        for mode in ALL_MODES {
            let style = if mode == self.filter {
                Style::default()
                    .fg(colors.bg())
                    .bg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text_dim())
            };
            mode_spans.push(Span::styled(format!(" {} ", mode.as_str()), style));
            mode_spans.push(Span::raw(" "));
        }
        let filter_lines = vec![
            Line::from(Span::styled(
                format!("{} < {} >", t!("menu.filter"), filter_label(self.filter)),
                Style::default().fg(colors.fg()),
            )),
            Line::from(""),
            Line::from(mode_spans),
        ];
        Paragraph::new(filter_lines)
            .alignment(Alignment::Center)
            .render(layout[1], buf);

        let item_lines: Vec<Line> = MENU_ITEMS
            .iter()
            .enumerate()
            .flat_map(|(i, &item)| {
                let is_selected = i == self.selected;
                let indicator = if is_selected { ">" } else { " " };
                let style = if is_selected {
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors.fg())
                };
                [
                    Line::from(Span::styled(format!("{indicator} {}", item_label(item)), style)),
                    Line::from(""),
                ]
            })
            .collect();
        Paragraph::new(item_lines)
            .alignment(Alignment::Center)
            .render(layout[3], buf);

        let best = match self.best {
            Some(score) => t!("menu.best", score = score).to_string(),
            None => t!("menu.no_best").to_string(),
        };
        Paragraph::new(Line::from(Span::styled(
            best,
            Style::default().fg(colors.warning()),
        )))
        .alignment(Alignment::Center)
        .render(layout[4], buf);
    }
}
