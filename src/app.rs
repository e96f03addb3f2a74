use std::path::PathBuf;
use std::time::Duration;

use crate::audio::{Cue, SoundPlayer};
use crate::config::Config;
use crate::engine::filter::FilterMode;
use crate::engine::ledger::HighScoreLedger;
use crate::engine::session::{Effect, GameSession, GameStatus};
use crate::question::bank::QuestionBank;
use crate::store::json_store::JsonStore;
use crate::ui::theme::Theme;

const CLOCK_STEP: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Menu,
    Game,
    Ranking,
    About,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    Start,
    Ranking,
    About,
    Quit,
}

pub const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem::Start,
    MenuItem::Ranking,
    MenuItem::About,
    MenuItem::Quit,
];

pub struct App {
    pub screen: AppScreen,
    pub menu_selected: usize,
    pub session: GameSession,
    pub theme: Theme,
    pub config: Config,
    pub should_quit: bool,
    /// Config file that receives filter changes; `None` keeps them in memory.
    pub config_path: Option<PathBuf>,
    store: Option<JsonStore>,
    player: Box<dyn SoundPlayer>,
    clock: Duration,
}

impl App {
    pub fn new(
        config: Config,
        bank: QuestionBank,
        store: Option<JsonStore>,
        player: Box<dyn SoundPlayer>,
        theme: Theme,
    ) -> Self {
        let ledger = store
            .as_ref()
            .map(JsonStore::load_high_scores)
            .unwrap_or_default();
        Self::with_session(config, GameSession::new(bank, ledger), store, player, theme)
    }

    pub fn with_session(
        config: Config,
        mut session: GameSession,
        store: Option<JsonStore>,
        player: Box<dyn SoundPlayer>,
        theme: Theme,
    ) -> Self {
        session.set_filter_mode(config.filter_mode);
        Self {
            screen: AppScreen::Menu,
            menu_selected: 0,
            session,
            theme,
            config,
            should_quit: false,
            config_path: None,
            store,
            player,
            clock: Duration::ZERO,
        }
    }

    pub fn ledger(&self) -> &HighScoreLedger {
        self.session.ledger()
    }

    pub fn selected_item(&self) -> MenuItem {
        MENU_ITEMS[self.menu_selected % MENU_ITEMS.len()]
    }

    pub fn menu_next(&mut self) {
        self.menu_selected = (self.menu_selected + 1) % MENU_ITEMS.len();
        self.play(Cue::Hover);
    }

    pub fn menu_prev(&mut self) {
        self.menu_selected = (self.menu_selected + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
        self.play(Cue::Hover);
    }

    pub fn cycle_filter(&mut self, forward: bool) {
        let current = self.session.filter_mode();
        let mode = if forward { current.next() } else { current.prev() };
        self.set_filter(mode);
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        if mode == self.session.filter_mode() {
            return;
        }
        self.session.set_filter_mode(mode);
        self.config.filter_mode = mode;
        self.play(Cue::Hover);
        self.persist_filter();
    }

    pub fn activate_menu(&mut self) {
        match self.selected_item() {
            MenuItem::Start => self.start_game(),
            MenuItem::Ranking => self.screen = AppScreen::Ranking,
            MenuItem::About => self.screen = AppScreen::About,
            MenuItem::Quit => self.should_quit = true,
        }
    }

    pub fn start_game(&mut self) {
        self.session.start_game();
        self.clock = Duration::ZERO;
        self.screen = AppScreen::Game;
        self.dispatch_effects();
    }

    /// Enter on the game screen: leave the reading phase, advance after a
    /// win, or restart after a loss.
    pub fn confirm(&mut self) {
        match self.session.status() {
            GameStatus::Playing if self.session.is_reading() => {
                self.session.start_round();
                self.clock = Duration::ZERO;
            }
            GameStatus::Victory => {
                self.session.next_level();
                self.clock = Duration::ZERO;
            }
            GameStatus::GameOver => {
                self.start_game();
                return;
            }
            _ => {}
        }
        self.dispatch_effects();
    }

    pub fn guess(&mut self, ch: char) {
        let ch = ch.to_ascii_uppercase();
        if !self.session.is_guessable(ch) {
            return;
        }
        self.session.submit_guess(ch);
        self.dispatch_effects();
    }

    pub fn use_trash(&mut self) {
        self.session.use_trash_powerup();
        self.dispatch_effects();
    }

    pub fn use_reveal(&mut self) {
        self.session.use_reveal_powerup();
        self.dispatch_effects();
    }

    pub fn abandon_game(&mut self) {
        self.session.reset_game();
        self.dispatch_effects();
        self.go_to_menu();
    }

    pub fn go_to_menu(&mut self) {
        self.screen = AppScreen::Menu;
    }

    /// Feeds wall-clock time to the round timer in whole seconds.
    pub fn on_tick(&mut self, elapsed: Duration) {
        if !self.session.accepts_input() {
            self.clock = Duration::ZERO;
            return;
        }
        self.clock += elapsed;
        while self.clock >= CLOCK_STEP && self.session.accepts_input() {
            self.clock -= CLOCK_STEP;
            self.session.tick_timer();
        }
        self.dispatch_effects();
    }

    fn dispatch_effects(&mut self) {
        for effect in self.session.drain_effects() {
            match effect {
                Effect::Play(cue) => self.play(cue),
                Effect::HighScoresChanged => {
                    if let Some(ref store) = self.store
                        && let Err(e) = store.save_high_scores(self.session.ledger())
                    {
                        tracing::warn!(error = %e, "failed to save high scores");
                    }
                }
            }
        }
    }

    fn play(&self, cue: Cue) {
        if self.config.sound_enabled {
            self.player.play(cue, cue.volume_at(self.config.sfx_volume));
        }
    }

    /// Writes the filter into the saved config, leaving one-run overrides
    /// (theme, locale, mute) out of the file.
    fn persist_filter(&self) {
        let Some(ref path) = self.config_path else {
            return;
        };
        let result = Config::load_from(path).and_then(|mut saved| {
            saved.filter_mode = self.config.filter_mode;
            saved.save_to(path)
        });
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to save config");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::audio::Silent;
    use crate::question::model::Question;
    use tempfile::TempDir;

    struct Recorder(Rc<RefCell<Vec<Cue>>>);

    impl SoundPlayer for Recorder {
        fn play(&self, cue: Cue, _volume: f32) {
            self.0.borrow_mut().push(cue);
        }
    }

    fn bank() -> QuestionBank {
        QuestionBank::new(vec![Question {
            id: "q1".to_string(),
            discipline: "BIO".to_string(),
            topic: "ENEM 2022".to_string(),
            hint: "Doença transmitida pelo Aedes aegypti.".to_string(),
            answer: "DENGUE".to_string(),
        }])
        .unwrap()
    }

    fn test_app(store: Option<JsonStore>) -> App {
        let session = GameSession::with_seed(bank(), HighScoreLedger::default(), 9);
        App::with_session(Config::default(), session, store, Box::new(Silent), Theme::default())
    }

    fn playing_app(store: Option<JsonStore>) -> App {
        let mut app = test_app(store);
        app.start_game();
        app.confirm();
        app
    }

    fn first_miss(app: &App) -> char {
        app.session
            .keyboard()
            .iter()
            .find(|k| k.is_idle() && !"DENGUE".contains(k.ch))
            .map(|k| k.ch)
            .unwrap()
    }

    #[test]
    fn menu_wraps_both_ways() {
        let mut app = test_app(None);
        app.menu_prev();
        assert_eq!(app.selected_item(), MenuItem::Quit);
        app.menu_next();
        assert_eq!(app.selected_item(), MenuItem::Start);
    }

    #[test]
    fn menu_activation_routes_screens() {
        let mut app = test_app(None);
        app.menu_selected = 1;
        app.activate_menu();
        assert_eq!(app.screen, AppScreen::Ranking);
        app.go_to_menu();
        app.menu_selected = 3;
        app.activate_menu();
        assert!(app.should_quit);
    }

    #[test]
    fn start_shows_reading_phase() {
        let mut app = test_app(None);
        app.activate_menu();
        assert_eq!(app.screen, AppScreen::Game);
        assert!(app.session.is_reading());
        app.on_tick(Duration::from_secs(5));
        assert_eq!(app.session.time_left(), app.session.round_time());
        app.confirm();
        assert!(!app.session.is_reading());
    }

    #[test]
    fn ticks_accumulate_into_seconds() {
        let mut app = playing_app(None);
        let start = app.session.time_left();
        for _ in 0..9 {
            app.on_tick(Duration::from_millis(100));
        }
        assert_eq!(app.session.time_left(), start);
        app.on_tick(Duration::from_millis(100));
        assert_eq!(app.session.time_left(), start - 1);
        app.on_tick(Duration::from_millis(2500));
        assert_eq!(app.session.time_left(), start - 3);
    }

    #[test]
    fn guesses_ignore_keys_off_the_keypad() {
        let mut app = playing_app(None);
        let absent = ('A'..='Z')
            .find(|&c| app.session.key_status(c).is_none())
            .unwrap();
        let time = app.session.time_left();
        app.guess(absent);
        assert_eq!(app.session.time_left(), time);
        assert_eq!(app.session.streak(), 0);
    }

    #[test]
    fn lowercase_key_guesses() {
        let mut app = playing_app(None);
        app.guess('d');
        assert_eq!(app.session.revealed()[0], Some('D'));
    }

    #[test]
    fn repeated_wrong_key_is_not_penalized_twice() {
        let mut app = playing_app(None);
        let miss = first_miss(&app);
        app.guess(miss);
        let time = app.session.time_left();
        app.guess(miss);
        assert_eq!(app.session.time_left(), time);
    }

    #[test]
    fn enter_advances_after_victory_and_restarts_after_loss() {
        let mut app = playing_app(None);
        for ch in "DENGU".chars() {
            app.guess(ch);
        }
        assert_eq!(app.session.status(), GameStatus::Victory);
        app.confirm();
        assert_eq!(app.session.level(), 2);
        app.confirm();

        app.on_tick(Duration::from_secs(600));
        assert_eq!(app.session.status(), GameStatus::GameOver);
        app.confirm();
        assert_eq!(app.session.status(), GameStatus::Playing);
        assert_eq!(app.session.level(), 1);
        assert_eq!(app.session.score(), 0);
    }

    #[test]
    fn game_over_persists_high_score() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        let mut app = playing_app(Some(store));
        app.guess('D');
        app.on_tick(Duration::from_secs(600));
        assert_eq!(app.session.status(), GameStatus::GameOver);

        let reloaded = JsonStore::with_base_dir(dir.path().to_path_buf())
            .unwrap()
            .load_high_scores();
        assert_eq!(reloaded.entries().len(), 1);
        assert_eq!(reloaded.entries()[0].score, app.session.score());
    }

    #[test]
    fn abandon_returns_to_menu_without_recording() {
        let mut app = playing_app(None);
        app.guess('D');
        app.abandon_game();
        assert_eq!(app.screen, AppScreen::Menu);
        assert_eq!(app.session.status(), GameStatus::Idle);
        assert!(app.ledger().is_empty());
    }

    #[test]
    fn filter_change_is_saved_to_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut app = test_app(None);
        app.config_path = Some(path.clone());
        app.cycle_filter(true);
        assert_eq!(app.session.filter_mode(), FilterMode::Hum);
        assert_eq!(Config::load_from(&path).unwrap().filter_mode, FilterMode::Hum);
        app.cycle_filter(false);
        app.cycle_filter(false);
        assert_eq!(app.session.filter_mode(), FilterMode::Lin);
    }

    #[test]
    fn effects_reach_the_player() {
        let cues = Rc::new(RefCell::new(Vec::new()));
        let session = GameSession::with_seed(bank(), HighScoreLedger::default(), 9);
        let mut app = App::with_session(
            Config::default(),
            session,
            None,
            Box::new(Recorder(Rc::clone(&cues))),
            Theme::default(),
        );
        app.menu_next();
        app.start_game();
        app.confirm();
        app.guess('D');
        let miss = first_miss(&app);
        app.guess(miss);
        assert_eq!(*cues.borrow(), vec![Cue::Hover, Cue::Hit, Cue::Miss]);
    }

    #[test]
    fn muted_config_plays_nothing() {
        let cues = Rc::new(RefCell::new(Vec::new()));
        let session = GameSession::with_seed(bank(), HighScoreLedger::default(), 9);
        let config = Config {
            sound_enabled: false,
            ..Config::default()
        };
        let mut app = App::with_session(
            config,
            session,
            None,
            Box::new(Recorder(Rc::clone(&cues))),
            Theme::default(),
        );
        app.start_game();
        app.confirm();
        app.guess('D');
        assert!(cues.borrow().is_empty());
    }
}
