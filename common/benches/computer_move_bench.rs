use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::tictactoe::{Board, GameMode, Mark, Position, TicTacToeGame, computer_move};

fn bench_computer_move_empty_board(rng: &mut SessionRng) {
    let mut board = Board::new();
    black_box(computer_move(&mut board, rng));
}

fn bench_computer_move_block() {
    let mut board = Board::new();
    board.set(Position::new(0, 0), Mark::X);
    board.set(Position::new(0, 1), Mark::X);
    board.set(Position::new(1, 1), Mark::O);
    let mut rng = SessionRng::new(0);
    black_box(computer_move(&mut board, &mut rng));
}

fn bench_full_one_player_game(seed: u64) {
    let mut game = TicTacToeGame::with_default_limit(GameMode::OnePlayer, SessionRng::new(seed));
    while !game.status().is_over() {
        let Some(&pos) = game.board().empty_positions().first() else {
            break;
        };
        if game.apply_move(pos, Mark::X).is_err() {
            break;
        }
    }
    black_box(game.status());
}

fn computer_move_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("computer_move");

    let mut rng = SessionRng::new(42);
    group.bench_function("empty_board", |b| {
        b.iter(|| bench_computer_move_empty_board(&mut rng))
    });

    group.bench_function("block", |b| b.iter(bench_computer_move_block));

    let mut seed = 0u64;
    group.bench_function("full_game", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            bench_full_one_player_game(seed)
        })
    });

    group.finish();
}

criterion_group!(benches, computer_move_bench);
criterion_main!(benches);
