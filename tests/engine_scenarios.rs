use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use cyber_arena::audio::Cue;
use cyber_arena::engine::filter::{ALL_MODES, FilterMode};
use cyber_arena::engine::keyboard::{KeyStatus, KeyboardKey};
use cyber_arena::engine::ledger::{HighScoreEntry, HighScoreLedger};
use cyber_arena::engine::session::{Effect, GameSession, GameStatus, STARTING_POWERUPS};
use cyber_arena::question::bank::QuestionBank;
use cyber_arena::question::model::Question;

fn gato_bank() -> QuestionBank {
    QuestionBank::new(vec![Question {
        id: "gato".to_string(),
        discipline: "BIO".to_string(),
        topic: "ENEM 2023".to_string(),
        hint: "Felino doméstico.".to_string(),
        answer: "GATO".to_string(),
    }])
    .unwrap()
}

fn gato_round() -> GameSession {
    let mut session = GameSession::with_seed(gato_bank(), HighScoreLedger::default(), 2024);
    session.start_game();
    session.start_round();
    session.drain_effects();
    session
}

fn snapshot(session: &GameSession) -> (u32, u32, u32, Vec<KeyboardKey>) {
    (
        session.score(),
        session.streak(),
        session.time_left(),
        session.keyboard().to_vec(),
    )
}

#[test]
fn scenario_a_correct_guess() {
    let mut session = gato_round();
    assert_eq!(session.current().unwrap().points_value, 100);
    let time = session.time_left();

    session.submit_guess('G');

    assert_eq!(session.revealed(), &[Some('G'), None, None, None]);
    assert_eq!(session.score(), 25);
    assert_eq!(session.streak(), 1);
    assert_eq!(session.time_left(), time + 2);
    assert_eq!(session.key_status('G'), Some(KeyStatus::Correct));
    assert_eq!(session.drain_effects(), vec![Effect::Play(Cue::Hit)]);
}

#[test]
fn scenario_b_wrong_guess_after_correct() {
    let mut session = gato_round();
    session.submit_guess('G');
    let time = session.time_left();

    // X is always on the keypad: it leads the filler alphabet.
    assert_eq!(session.key_status('X'), Some(KeyStatus::Idle));
    session.submit_guess('X');

    assert_eq!(session.streak(), 0);
    assert_eq!(session.time_left(), time - 5);
    assert_eq!(session.status(), GameStatus::Playing);
    assert_eq!(session.key_status('X'), Some(KeyStatus::Wrong));
    assert!(session.ledger().is_empty());
}

#[test]
fn scenario_b_wrong_guess_that_empties_the_clock() {
    let mut session = gato_round();
    session.submit_guess('G');
    while session.time_left() > 3 {
        session.tick_timer();
    }

    session.submit_guess('X');

    assert_eq!(session.status(), GameStatus::GameOver);
    assert_eq!(session.time_left(), 0);
    let entries = session.ledger().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].score, 25);
    assert_eq!(entries[0].mode, FilterMode::Mix);
}

#[test]
fn scenario_b_zero_score_loss_records_nothing() {
    let mut session = gato_round();
    while session.time_left() > 5 {
        session.tick_timer();
    }
    session.submit_guess('X');
    assert_eq!(session.status(), GameStatus::GameOver);
    assert!(session.ledger().is_empty());
}

#[test]
fn scenario_c_clearing_the_word() {
    let mut session = gato_round();
    let start_time = session.time_left();

    for ch in ['G', 'A', 'T'] {
        session.submit_guess(ch);
    }
    assert_eq!(session.score(), 25 + 27 + 29);
    session.submit_guess('O');

    let time_at_clear = start_time + 8;
    assert_eq!(session.status(), GameStatus::Victory);
    assert_eq!(session.time_left(), time_at_clear);
    assert_eq!(session.score(), 25 + 27 + 29 + 31 + time_at_clear * 2);
    let effects = session.drain_effects();
    assert_eq!(effects.last(), Some(&Effect::Play(Cue::Win)));
}

#[test]
fn scenario_d_trash_with_empty_inventory() {
    let mut session = gato_round();
    for _ in 0..STARTING_POWERUPS {
        session.use_trash_powerup();
    }
    assert_eq!(session.powerups().trash, 0);
    let before = session.keyboard().to_vec();

    session.use_trash_powerup();

    assert_eq!(session.keyboard(), before.as_slice());
    assert_eq!(session.powerups().trash, 0);
}

#[test]
fn scenario_e_ledger_keeps_top_ten() {
    let mut ledger = HighScoreLedger::default();
    let mut scores: Vec<u32> = (1..=11).map(|i| i * 37).collect();
    scores.shuffle(&mut SmallRng::seed_from_u64(5));
    for (i, score) in scores.iter().enumerate() {
        ledger.record(HighScoreEntry {
            id: format!("run-{i}"),
            date: chrono::Utc::now(),
            score: *score,
            mode: FilterMode::Mix,
        });
    }
    let kept: Vec<u32> = ledger.entries().iter().map(|e| e.score).collect();
    let expected: Vec<u32> = (2..=11).rev().map(|i| i * 37).collect();
    assert_eq!(kept, expected);
}

#[test]
fn new_round_starts_clean_for_every_bundled_question() {
    let bank = QuestionBank::embedded().unwrap();
    for seed in 0..64 {
        let mut session = GameSession::with_seed(bank.clone(), HighScoreLedger::default(), seed);
        session.start_game();
        let round = session.current().unwrap();
        assert_eq!(session.revealed().len(), round.answer_len());
        assert!(session.revealed().iter().all(Option::is_none));
        for &ch in round.answer() {
            assert_eq!(session.key_status(ch), Some(KeyStatus::Idle), "{ch} missing");
        }
    }
}

#[test]
fn filtered_games_stay_in_their_area() {
    let bank = QuestionBank::embedded().unwrap();
    for mode in ALL_MODES {
        let mut session = GameSession::with_seed(bank.clone(), HighScoreLedger::default(), 77);
        session.set_filter_mode(mode);
        for _ in 0..20 {
            session.start_game();
            let discipline = &session.current().unwrap().question.discipline;
            assert!(mode.admits(discipline), "{mode} drew {discipline}");
        }
    }
}

#[test]
fn operations_outside_play_change_nothing() {
    let mut idle = GameSession::with_seed(gato_bank(), HighScoreLedger::default(), 1);
    let before = snapshot(&idle);
    idle.submit_guess('G');
    idle.use_reveal_powerup();
    idle.use_trash_powerup();
    idle.tick_timer();
    assert_eq!(snapshot(&idle), before);

    let mut won = gato_round();
    for ch in "GATO".chars() {
        won.submit_guess(ch);
    }
    let before = snapshot(&won);
    won.submit_guess('X');
    won.use_reveal_powerup();
    won.use_trash_powerup();
    won.tick_timer();
    assert_eq!(snapshot(&won), before);

    let mut lost = gato_round();
    while lost.status() == GameStatus::Playing {
        lost.tick_timer();
    }
    let before = snapshot(&lost);
    lost.submit_guess('G');
    lost.use_reveal_powerup();
    lost.use_trash_powerup();
    assert_eq!(snapshot(&lost), before);
}

#[test]
fn random_play_keeps_score_and_streak_rules() {
    let bank = QuestionBank::embedded().unwrap();
    for seed in 0..16 {
        let mut session = GameSession::with_seed(bank.clone(), HighScoreLedger::default(), seed);
        let mut rng = SmallRng::seed_from_u64(seed + 1000);
        session.start_game();
        session.start_round();

        for _ in 0..200 {
            if session.status() == GameStatus::Victory {
                session.next_level();
                session.start_round();
            }
            if session.status() != GameStatus::Playing {
                break;
            }
            let keys: Vec<char> = session
                .keyboard()
                .iter()
                .filter(|k| session.is_guessable(k.ch))
                .map(|k| k.ch)
                .collect();
            let Some(&ch) = keys.choose(&mut rng) else {
                break;
            };
            let (score, streak) = (session.score(), session.streak());
            let hit = session.current().unwrap().contains(ch);
            session.submit_guess(ch);

            assert!(session.score() >= score);
            if hit {
                assert_eq!(session.streak(), streak + 1);
            } else {
                assert_eq!(session.streak(), 0);
            }
        }
    }
}
