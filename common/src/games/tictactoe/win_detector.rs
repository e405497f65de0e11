use super::board::Board;
use super::types::{Mark, Position, WinningLine};

const fn at(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Every line of the board in scan order: rows, columns, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Returns the first complete line found in scan order.
pub fn evaluate_win(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&line| {
        let mark = board.get(line[0]);
        if mark == Mark::Empty {
            return None;
        }
        if line.iter().all(|&pos| board.get(pos) == mark) {
            Some(WinningLine::new(mark, line))
        } else {
            None
        }
    })
}

pub fn evaluate_tie(board: &Board) -> bool {
    board.is_full() && evaluate_win(board).is_none()
}
