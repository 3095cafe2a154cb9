use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use plum_rules::game_state::position::Position;
use plum_rules::search::alpha_beta::{search_best_move, SearchConfig, DEFAULT_SEARCH_DEPTH};

const CASES: &[(&str, &str)] = &[
    (
        "startpos",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    ("rook_endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
];

/// `PLUM_RULES_BENCH_DEPTH` overrides the search depth; the default keeps a
/// run short.
fn bench_depth() -> u8 {
    std::env::var("PLUM_RULES_BENCH_DEPTH")
        .ok()
        .and_then(|value| value.trim().parse::<u8>().ok())
        .unwrap_or(DEFAULT_SEARCH_DEPTH - 1)
}

fn bench_search(c: &mut Criterion) {
    let depth = bench_depth();
    let mut group = c.benchmark_group(format!("search_d{depth}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for (name, fen) in CASES {
        let position = Position::from_fen(fen).expect("benchmark FEN should parse");
        let side = position.side_to_move;
        let config = SearchConfig { depth };

        let warmup = search_best_move(&position, side, config);
        assert!(warmup.best_move.is_some(), "{name} should have a move");

        group.bench_with_input(BenchmarkId::from_parameter(name), &position, |b, pos| {
            b.iter(|| {
                let result = search_best_move(black_box(pos), side, config);
                black_box(result.best_move)
            });
        });
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
