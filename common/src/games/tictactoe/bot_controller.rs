use crate::games::SessionRng;
use super::board::Board;
use super::types::{Mark, Position};
use super::win_detector::evaluate_win;

pub const COMPUTER_MARK: Mark = Mark::O;
pub const HUMAN_MARK: Mark = Mark::X;

/// Which rule produced the computer's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReason {
    TakeWin,
    BlockLoss,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerMove {
    pub position: Position,
    pub reason: MoveReason,
}

/// Places the computer's mark on the board and returns where it went.
///
/// Rules are tried in order over empty cells in row-major order: complete a
/// line for O, otherwise occupy the cell that would complete a line for X,
/// otherwise a uniformly random empty cell. Returns `None` on a full board.
pub fn computer_move(board: &mut Board, rng: &mut SessionRng) -> Option<ComputerMove> {
    let available_moves = board.empty_positions();
    if available_moves.is_empty() {
        return None;
    }

    let (position, reason) =
        if let Some(pos) = find_winning_move(board, COMPUTER_MARK, &available_moves) {
            (pos, MoveReason::TakeWin)
        } else if let Some(pos) = find_winning_move(board, HUMAN_MARK, &available_moves) {
            (pos, MoveReason::BlockLoss)
        } else {
            (rng.pick(&available_moves)?, MoveReason::Random)
        };

    board.set(position, COMPUTER_MARK);
    Some(ComputerMove { position, reason })
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[Position]) -> Option<Position> {
    for &pos in moves {
        board.set(pos, mark);
        let winner = evaluate_win(board).map(|line| line.mark);
        board.set(pos, Mark::Empty);

        if winner == Some(mark) {
            return Some(pos);
        }
    }
    None
}
