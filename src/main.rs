use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use cyber_arena::app::{App, AppScreen};
use cyber_arena::audio;
use cyber_arena::config::Config;
use cyber_arena::engine::filter::FilterMode;
use cyber_arena::event::{AppEvent, EventHandler};
use cyber_arena::question::bank::QuestionBank;
use cyber_arena::store::json_store::JsonStore;
use cyber_arena::ui;
use cyber_arena::ui::theme::Theme;

#[derive(Parser)]
#[command(name = "cyber-arena", version, about = "Terminal word-guessing arcade for exam review")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Question filter (mix, hum, nat, lin)")]
    mode: Option<FilterMode>,

    #[arg(short, long, help = "Interface language (en, pt-BR)")]
    locale: Option<String>,

    #[arg(short, long, help = "Question bank JSON file to use instead of the bundled one")]
    questions: Option<PathBuf>,

    #[arg(long, help = "Disable sound effects")]
    mute: bool,

    #[arg(short, long, help = "Log debug events (see CYBER_ARENA_LOG)")]
    verbose: bool,

    #[arg(long, value_name = "PATH", help = "Write config and high scores to a JSON file and exit")]
    export: Option<PathBuf>,

    #[arg(long, value_name = "PATH", help = "Restore config and high scores from an export and exit")]
    import: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = JsonStore::new()?;
    init_tracing(store.base_dir(), cli.verbose);

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "unreadable config, using defaults");
        Config::default()
    });

    if let Some(path) = cli.export {
        let data = store.export_all(&config);
        JsonStore::write_export(&path, &data)?;
        println!("Exported to {}", path.display());
        return Ok(());
    }
    if let Some(path) = cli.import {
        let data = JsonStore::read_export(&path)?;
        store.import_all(&data)?;
        data.config.save()?;
        println!("Imported from {}", path.display());
        return Ok(());
    }

    // Flags apply to this run only; the app persists nothing but the filter.
    let mut run_config = config.clone();
    if let Some(theme) = cli.theme {
        run_config.theme = theme;
    }
    if let Some(locale) = cli.locale {
        run_config.locale = locale;
    }
    if let Some(mode) = cli.mode {
        run_config.filter_mode = mode;
    }
    if let Some(questions) = cli.questions {
        run_config.question_file = Some(questions);
    }
    if cli.mute {
        run_config.sound_enabled = false;
    }
    let themes = Theme::available_themes();
    let theme_names: Vec<&str> = themes.iter().map(String::as_str).collect();
    run_config.validate(&theme_names);

    cyber_arena::set_locale(&run_config.locale);

    let bank = QuestionBank::load(run_config.question_file.as_deref())
        .context("cannot start without questions")?;
    tracing::info!(questions = bank.len(), "question bank loaded");

    let theme = Theme::load(&run_config.theme).unwrap_or_default();
    let player = audio::default_player(run_config.sound_enabled);
    let mut app = App::new(run_config, bank, Some(store), player, theme);
    app.config_path = Some(Config::config_dir().join("config.toml"));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn init_tracing(log_dir: &Path, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("CYBER_ARENA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // The terminal belongs to the UI, so logs only go to a file.
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("cyber-arena.log"))
    else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick | AppEvent::Resize => {}
        }

        // Keys arrive between ticks, so the clock is fed on every event.
        let now = Instant::now();
        app.on_tick(now - last_tick);
        last_tick = now;

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Menu => handle_menu_key(app, key),
        AppScreen::Game => handle_game_key(app, key),
        AppScreen::Ranking | AppScreen::About => handle_info_key(app, key),
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.menu_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.menu_next(),
        KeyCode::Left | KeyCode::Char('h') => app.cycle_filter(false),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.cycle_filter(true),
        KeyCode::Char('r') => app.screen = AppScreen::Ranking,
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_menu(),
        _ => {}
    }
}

fn handle_game_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.abandon_game(),
        KeyCode::Enter => app.confirm(),
        KeyCode::Left => app.use_trash(),
        KeyCode::Right => app.use_reveal(),
        KeyCode::Char(ch) if ch.is_ascii_alphanumeric() || ch == ' ' => app.guess(ch),
        _ => {}
    }
}

fn handle_info_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => app.go_to_menu(),
        _ => {}
    }
}
