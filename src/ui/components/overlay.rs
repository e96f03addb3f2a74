use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::engine::scoring;
use crate::engine::session::{GameSession, GameStatus};
use crate::ui::theme::Theme;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayKind {
    Reading,
    Victory { score: u32 },
    GameOver { answer: String, score: u32 },
}

impl OverlayKind {
    /// The popup the game screen shows for the session's state, if any.
    pub fn for_session(session: &GameSession) -> Option<Self> {
        match session.status() {
            GameStatus::Playing if session.is_reading() => Some(OverlayKind::Reading),
            GameStatus::Victory => Some(OverlayKind::Victory {
                score: session.score(),
            }),
            GameStatus::GameOver => Some(OverlayKind::GameOver {
                answer: session
                    .current()
                    .map(|r| r.question.answer.clone())
                    .unwrap_or_default(),
                score: session.score(),
            }),
            _ => None,
        }
    }
}

pub struct Overlay<'a> {
    pub kind: OverlayKind,
    pub theme: &'a Theme,
}

impl Widget for Overlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let (title, accent, lines, action) = match &self.kind {
            OverlayKind::Reading => (
                t!("overlay.reading_title").to_string(),
                colors.accent(),
                vec![t!("overlay.reading_body").to_string()],
                t!("overlay.reading_action").to_string(),
            ),
            OverlayKind::Victory { score } => (
                t!("overlay.victory_title").to_string(),
                colors.success(),
                vec![t!("overlay.victory_body", score = score).to_string()],
                t!("overlay.victory_action").to_string(),
            ),
            OverlayKind::GameOver { answer, score } => (
                t!("overlay.gameover_title").to_string(),
                colors.error(),
                vec![
                    t!("overlay.gameover_answer", answer = answer).to_string(),
                    t!("overlay.gameover_score", score = score).to_string(),
                    scoring::rank_title(*score).as_str().to_string(),
                ],
                t!("overlay.gameover_action").to_string(),
            ),
        };

        Clear.render(area, buf);
        let block = Block::bordered()
            .title(Span::styled(
                format!(" {title} "),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(colors.bg()));

        let mut text: Vec<Line> = vec![Line::from("")];
        text.extend(
            lines
                .into_iter()
                .map(|l| Line::from(Span::styled(l, Style::default().fg(colors.fg())))),
        );
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            action,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )));

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
