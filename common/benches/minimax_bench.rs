use common::games::tictactoe::{
    Board, COMPUTER_MARK, HUMAN_MARK, Mark, find_best_move, minimax,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_minimax_empty_board() -> i32 {
    let mut board = Board::new();
    minimax(&mut board, true)
}

fn bench_find_best_move_mid_game() {
    let mut board = Board::from_rows([
        [HUMAN_MARK, Mark::Empty, Mark::Empty],
        [Mark::Empty, COMPUTER_MARK, Mark::Empty],
        [Mark::Empty, Mark::Empty, HUMAN_MARK],
    ]);
    black_box(find_best_move(&mut board));
}

fn bench_computer_vs_first_free_cell() {
    let mut board = Board::new();
    let mut to_move = COMPUTER_MARK;

    while !board.is_win(HUMAN_MARK) && !board.is_win(COMPUTER_MARK) && !board.is_draw() {
        let mv = if to_move == COMPUTER_MARK {
            find_best_move(&mut board)
        } else {
            board.available_moves().first().copied()
        };
        let Some(mv) = mv else {
            break;
        };
        board.make_move(mv, to_move);
        to_move = match to_move.opponent() {
            Some(next) => next,
            None => break,
        };
    }
    black_box(board);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sample_size(10);

    group.bench_function("empty_board", |b| b.iter(bench_minimax_empty_board));

    group.bench_function("find_best_move_mid_game", |b| {
        b.iter(bench_find_best_move_mid_game)
    });

    group.bench_function("computer_vs_first_free_cell", |b| {
        b.iter(bench_computer_vs_first_free_cell)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
