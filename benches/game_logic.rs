use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_chroma::core::{find_region, Board, GameSession};
use tui_chroma::types::Coord;

fn bench_find_region_worst_case(c: &mut Criterion) {
    // Every non-goal cell green: the search visits all 48 tiles.
    let board = Board::from_rows([
        "GGGGGGGG",
        "GGGGGGGG",
        "**GGGG**",
        "**GGGG**",
        "**GGGG**",
        "**GGGG**",
        "GGGGGGGG",
        "GGGGGGGG",
    ]);

    c.bench_function("find_region_full_board", |b| {
        b.iter(|| find_region(black_box(&board), black_box(Coord::new(0, 0))))
    });
}

fn bench_find_region_single_tile(c: &mut Criterion) {
    let board = Board::from_rows([
        "R.......",
        "........",
        "**....**",
        "**....**",
        "**....**",
        "**....**",
        "........",
        "........",
    ]);

    c.bench_function("find_region_single_tile", |b| {
        b.iter(|| find_region(black_box(&board), black_box(Coord::new(0, 0))))
    });
}

fn bench_swap_turn(c: &mut Criterion) {
    c.bench_function("swap_and_refill", |b| {
        let mut session = GameSession::new(12345);
        session.start();
        b.iter(|| {
            // Restart once the board fills so every iteration measures a
            // real swap plus refill, not a game-over rejection.
            if session.is_game_over() {
                session.start();
            }
            let mut picked = 0;
            'outer: for row in 0..8u8 {
                for col in 0..8u8 {
                    let coord = Coord::new(row, col);
                    if session.board().get(coord).is_some_and(|cell| cell.is_color()) {
                        session.toggle_select(coord);
                        picked += 1;
                        if picked == 2 {
                            break 'outer;
                        }
                    }
                }
            }
            let _ = session.swap();
        })
    });
}

fn bench_start(c: &mut Criterion) {
    c.bench_function("start_session", |b| {
        let mut session = GameSession::new(777);
        b.iter(|| session.start())
    });
}

criterion_group!(
    benches,
    bench_find_region_worst_case,
    bench_find_region_single_tile,
    bench_swap_turn,
    bench_start
);
criterion_main!(benches);
