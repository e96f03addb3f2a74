use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use cyber_arena::engine::filter::FilterMode;
use cyber_arena::engine::keyboard;
use cyber_arena::engine::ledger::{HighScoreEntry, HighScoreLedger};
use cyber_arena::engine::selection;
use cyber_arena::engine::session::{GameSession, GameStatus};
use cyber_arena::question::bank::QuestionBank;
use cyber_arena::question::model::Question;

const TAGS: [&str; 8] = ["HIST", "GEO", "MAT", "FIS", "BIO", "LIN", "ING", "ARTE"];
const ANSWERS: [&str; 6] = ["GATO", "FOTOSSINTESE", "MITOCONDRIA", "BARROCO", "ENTROPIA", "SAMBA"];

fn make_bank(count: usize) -> QuestionBank {
    let questions = (0..count)
        .map(|i| Question {
            id: format!("q{i}"),
            discipline: TAGS[i % TAGS.len()].to_string(),
            topic: format!("ENEM {}", 2009 + i % 15),
            hint: "x".repeat(40 + (i * 13) % 400),
            answer: ANSWERS[i % ANSWERS.len()].to_string(),
        })
        .collect();
    QuestionBank::new(questions).expect("non-empty bank")
}

fn bench_selection(c: &mut Criterion) {
    let bank = make_bank(5000);
    let mut rng = SmallRng::seed_from_u64(7);

    c.bench_function("select (5K questions, NAT filter)", |b| {
        b.iter(|| selection::select(black_box(FilterMode::Nat), &bank, &mut rng).id.len())
    });
}

fn bench_keyboard(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(11);

    c.bench_function("keyboard generate (12-letter answer)", |b| {
        b.iter(|| keyboard::generate(black_box("FOTOSSINTESE"), &mut rng))
    });
}

fn bench_ledger(c: &mut Criterion) {
    let date = chrono::Utc::now();

    c.bench_function("ledger record (1K finished games)", |b| {
        b.iter(|| {
            let mut ledger = HighScoreLedger::default();
            for i in 0..1000u32 {
                ledger.record(HighScoreEntry {
                    id: format!("run-{i}"),
                    date,
                    score: (i * 7919) % 5000,
                    mode: FilterMode::Mix,
                });
            }
            ledger
        })
    });
}

fn bench_scripted_game(c: &mut Criterion) {
    let bank = make_bank(500);

    // Clears ten rounds by guessing each answer's letters in order.
    c.bench_function("scripted game (10 rounds)", |b| {
        b.iter(|| {
            let mut session =
                GameSession::with_seed(bank.clone(), HighScoreLedger::default(), 42);
            session.start_game();
            for _ in 0..10 {
                session.start_round();
                let answer: Vec<char> = session
                    .current()
                    .map(|r| r.answer().to_vec())
                    .unwrap_or_default();
                for ch in answer {
                    session.submit_guess(ch);
                }
                if session.status() != GameStatus::Victory {
                    break;
                }
                session.next_level();
            }
            session.drain_effects();
            session.score()
        })
    });
}

criterion_group!(
    benches,
    bench_selection,
    bench_keyboard,
    bench_ledger,
    bench_scripted_game,
);
criterion_main!(benches);
