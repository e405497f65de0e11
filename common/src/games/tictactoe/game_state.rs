use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::{COMPUTER_MARK, ComputerMove, HUMAN_MARK, computer_move};
use super::scoreboard::{MIN_MAX_GAMES, Scoreboard};
use super::types::{GameMode, GameStatus, Mark, Position, WinningLine};
use super::win_detector::{evaluate_tie, evaluate_win};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    OutOfBounds(Position),
    Occupied(Position),
    NotYourTurn { expected: Mark, found: Mark },
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::OutOfBounds(pos) => {
                write!(f, "Position ({}, {}) is out of bounds", pos.row, pos.col)
            }
            MoveError::Occupied(pos) => {
                write!(f, "Cell ({}, {}) is already marked", pos.row, pos.col)
            }
            MoveError::NotYourTurn { expected, found } => write!(
                f,
                "Not your turn: expected {}, got {}",
                expected.symbol(),
                found.symbol()
            ),
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub status: GameStatus,
    pub computer_move: Option<ComputerMove>,
}

/// Result of a finished game, kept until the next reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
    /// Counters right after this game was recorded, before any rollover.
    pub scores: Scoreboard,
    pub session_rolled_over: bool,
}

impl GameOver {
    pub fn message(&self, mode: GameMode) -> String {
        match (self.status, mode) {
            (GameStatus::Won(Mark::O), GameMode::OnePlayer) => "Computer wins!".to_string(),
            (GameStatus::Won(mark), _) => format!("Player {} wins!", mark.symbol()),
            (GameStatus::Tied, _) => "Tie".to_string(),
            (GameStatus::InProgress, _) => String::new(),
        }
    }
}

pub struct TicTacToeGame {
    mode: GameMode,
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    scoreboard: Scoreboard,
    max_games: u32,
    game_over: Option<GameOver>,
    rng: SessionRng,
}

impl TicTacToeGame {
    pub fn new(mode: GameMode, max_games: u32, rng: SessionRng) -> Self {
        Self {
            mode,
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            winning_line: None,
            scoreboard: Scoreboard::new(),
            max_games: max_games.max(MIN_MAX_GAMES),
            game_over: None,
            rng,
        }
    }

    pub fn with_default_limit(mode: GameMode, rng: SessionRng) -> Self {
        Self::new(mode, mode.default_max_games(), rng)
    }

    /// Places `mark` at `position`. In one-player mode the computer answers
    /// within the same call unless the human's move ended the game.
    pub fn apply_move(&mut self, position: Position, mark: Mark) -> Result<MoveOutcome, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        if !position.is_on_board() {
            return Err(MoveError::OutOfBounds(position));
        }

        let expected = match self.mode {
            GameMode::OnePlayer => HUMAN_MARK,
            GameMode::TwoPlayer => self.current_mark,
        };
        if mark != expected || self.current_mark != expected {
            return Err(MoveError::NotYourTurn { expected: self.current_mark, found: mark });
        }

        if self.board.get(position) != Mark::Empty {
            return Err(MoveError::Occupied(position));
        }

        self.board.set(position, mark);
        self.finish_turn();

        let mut computer = None;
        if self.mode == GameMode::OnePlayer && !self.status.is_over() {
            computer = self.play_computer_turn();
        }

        self.check_session_limit();

        Ok(MoveOutcome {
            status: self.status,
            computer_move: computer,
        })
    }

    /// Clears the board for a new game. In one-player mode the computer
    /// opens when the number of games played is odd, and its opening move is
    /// returned. After a finished game the count is the one recorded before
    /// any session rollover.
    pub fn reset(&mut self) -> Option<ComputerMove> {
        self.board.clear();
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        self.current_mark = self.starting_mark();
        self.game_over = None;

        if self.mode == GameMode::OnePlayer && self.current_mark == COMPUTER_MARK {
            self.play_computer_turn()
        } else {
            None
        }
    }

    pub fn set_max_games(&mut self, max_games: u32) {
        self.max_games = max_games.max(MIN_MAX_GAMES);
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn max_games(&self) -> u32 {
        self.max_games
    }

    pub fn game_over(&self) -> Option<&GameOver> {
        self.game_over.as_ref()
    }

    pub fn is_human_turn(&self) -> bool {
        if self.status.is_over() {
            return false;
        }
        match self.mode {
            GameMode::OnePlayer => self.current_mark == HUMAN_MARK,
            GameMode::TwoPlayer => true,
        }
    }

    fn starting_mark(&self) -> Mark {
        let games_played = match &self.game_over {
            Some(game_over) => game_over.scores.games_played,
            None => self.scoreboard.games_played,
        };
        match self.mode {
            GameMode::TwoPlayer => Mark::X,
            GameMode::OnePlayer if games_played % 2 == 0 => HUMAN_MARK,
            GameMode::OnePlayer => COMPUTER_MARK,
        }
    }

    fn play_computer_turn(&mut self) -> Option<ComputerMove> {
        let chosen = computer_move(&mut self.board, &mut self.rng)?;
        self.finish_turn();
        Some(chosen)
    }

    fn finish_turn(&mut self) {
        if let Some(line) = evaluate_win(&self.board) {
            self.winning_line = Some(line);
            self.end_game(GameStatus::Won(line.mark));
        } else if evaluate_tie(&self.board) {
            self.end_game(GameStatus::Tied);
        } else if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn end_game(&mut self, status: GameStatus) {
        self.status = status;
        self.scoreboard.record(status);
        self.game_over = Some(GameOver {
            status,
            winning_line: self.winning_line,
            scores: self.scoreboard,
            session_rolled_over: false,
        });
    }

    fn check_session_limit(&mut self) {
        if self.scoreboard.roll_over_if_needed(self.max_games)
            && let Some(game_over) = self.game_over.as_mut()
        {
            game_over.session_rolled_over = true;
        }
    }

    #[cfg(test)]
    fn set_position(&mut self, board: Board, current_mark: Mark) {
        self.board = board;
        self.current_mark = current_mark;
    }
}
