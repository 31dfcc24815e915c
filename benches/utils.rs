use std::{sync::Arc, time::Duration};

use chesseract::{utils::count_nodes, Boring2D, Hyperboard, Match, Registry, RuleSet};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

fn random_game(max_plies: usize) -> Match {
    let mut rng = StdRng::seed_from_u64(7);
    let mut game = Match::new(Arc::new(Boring2D));
    for ply in 0..max_plies {
        let time = Duration::from_secs(ply as u64);
        let moves = game.rule_set.legal_moves(&game.board, time);
        let Some(_move) = moves.choose(&mut rng).cloned() else {
            break;
        };
        game.apply(_move).unwrap();
    }
    game
}

fn criterion_benchmark(c: &mut Criterion) {
    let registry = Registry::with_defaults();
    let game = random_game(40);
    let json = game.to_json().unwrap();
    let bytes = game.to_bytes().unwrap();

    c.bench_function("flat default board", |b| b.iter(|| Boring2D.default_board()));
    c.bench_function("hyper default board", |b| b.iter(|| Hyperboard.default_board()));
    c.bench_function("legal moves", |b| {
        b.iter(|| Boring2D.legal_moves(black_box(&game.board), Duration::ZERO))
    });
    c.bench_function("count nodes 2", |b| {
        b.iter(|| count_nodes(&Boring2D, black_box(&Boring2D.default_board()), 2))
    });
    c.bench_function("random game 40", |b| b.iter(|| random_game(40)));
    c.bench_function("json decode", |b| {
        b.iter(|| Match::from_json(black_box(&json), &registry).unwrap())
    });
    c.bench_function("postcard decode", |b| {
        b.iter(|| Match::from_bytes(black_box(&bytes), &registry).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
