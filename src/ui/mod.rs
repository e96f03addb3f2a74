pub mod components;
pub mod layout;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use rust_i18n::t;

use crate::app::{App, AppScreen};
use crate::engine::session::GameStatus;
use components::about::About;
use components::answer_slots::{self, AnswerSlots};
use components::hint_panel::HintPanel;
use components::keypad::Keypad;
use components::menu::StartMenu;
use components::overlay::{Overlay, OverlayKind};
use components::powerup_bar::PowerupBar;
use components::ranking_table::RankingTable;
use components::timer_bar::TimerBar;
use layout::{GameLayout, MAX_CONTENT_WIDTH, centered_rect, content_column};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Menu => render_menu(frame, app),
        AppScreen::Game => render_game(frame, app),
        AppScreen::Ranking => render_ranking(frame, app),
        AppScreen::About => render_about(frame, app),
    }
}

fn render_footer(frame: &mut Frame, app: &App, text: String, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(app.theme.colors.text_dim()),
    )));
    frame.render_widget(footer, area);
}

fn split_body_footer(area: Rect) -> (Rect, Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (layout[0], layout[1])
}

fn render_menu(frame: &mut Frame, app: &App) {
    let (body, footer) = split_body_footer(frame.area());
    let menu = StartMenu::new(
        app.menu_selected,
        app.session.filter_mode(),
        app.ledger().best().map(|e| e.score),
        &app.theme,
    );
    frame.render_widget(&menu, centered_rect(50, 80, body));
    render_footer(frame, app, t!("menu.footer").to_string(), footer);
}

fn render_game(frame: &mut Frame, app: &App) {
    let session = &app.session;
    let colors = &app.theme.colors;
    let Some(round) = session.current() else {
        return;
    };
    let layout = GameLayout::new(frame.area());

    let mut header_spans = vec![
        Span::styled(
            format!(" {} ", round.question.discipline),
            Style::default()
                .fg(colors.bg())
                .bg(colors.accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", round.question.topic),
            Style::default().fg(colors.header_fg()).bg(colors.header_bg()),
        ),
        Span::styled(
            format!(
                "| {} | {} | {} ",
                t!("game.level", level = session.level()),
                t!("game.score", score = session.score()),
                t!("game.streak", streak = session.streak()),
            ),
            Style::default().fg(colors.header_fg()).bg(colors.header_bg()),
        ),
    ];
    if session.is_clutch() {
        header_spans.push(Span::styled(
            format!(" {} ", t!("game.clutch")),
            Style::default()
                .fg(colors.bg())
                .bg(colors.error())
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
        ));
    }
    let header = Paragraph::new(Line::from(header_spans))
        .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    frame.render_widget(TimerBar::new(session, &app.theme), layout.timer);
    frame.render_widget(
        HintPanel {
            round,
            theme: &app.theme,
        },
        layout.hint,
    );

    let expose = session.status() == GameStatus::GameOver;
    frame.render_widget(
        AnswerSlots {
            slots: answer_slots::slots(round.answer(), session.revealed(), expose),
            theme: &app.theme,
        },
        layout.slots,
    );

    let active = session.accepts_input();
    frame.render_widget(
        Keypad {
            keys: session.keyboard(),
            active,
            theme: &app.theme,
        },
        layout.keypad,
    );
    frame.render_widget(
        PowerupBar {
            inventory: session.powerups(),
            active,
            theme: &app.theme,
        },
        layout.powerups,
    );
    render_footer(frame, app, t!("game.footer").to_string(), layout.footer);

    if let Some(kind) = OverlayKind::for_session(session) {
        let popup = centered_rect(50, 35, content_column(frame.area(), MAX_CONTENT_WIDTH));
        frame.render_widget(
            Overlay {
                kind,
                theme: &app.theme,
            },
            popup,
        );
    }
}

fn render_ranking(frame: &mut Frame, app: &App) {
    let (body, footer) = split_body_footer(frame.area());
    frame.render_widget(
        RankingTable {
            entries: app.ledger().entries(),
            theme: &app.theme,
        },
        centered_rect(60, 80, body),
    );
    render_footer(frame, app, t!("ranking.footer").to_string(), footer);
}

fn render_about(frame: &mut Frame, app: &App) {
    let (body, footer) = split_body_footer(frame.area());
    frame.render_widget(
        About {
            question_count: app.session.bank().len(),
            theme: &app.theme,
        },
        centered_rect(60, 70, body),
    );
    render_footer(frame, app, t!("about.footer").to_string(), footer);
}
