mod board;
mod bot_controller;
mod game_state;
mod scoreboard;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{COMPUTER_MARK, ComputerMove, HUMAN_MARK, MoveReason, computer_move};
pub use game_state::{GameOver, MoveError, MoveOutcome, TicTacToeGame};
pub use scoreboard::{MIN_MAX_GAMES, Scoreboard};
pub use types::{BOARD_SIZE, GameMode, GameStatus, Mark, Position, WinningLine};
pub use win_detector::{LINES, evaluate_tie, evaluate_win};
