use super::types::{GameStatus, Mark};

pub const MIN_MAX_GAMES: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    pub wins_x: u32,
    pub wins_o: u32,
    pub ties: u32,
    pub games_played: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. An in-progress status is ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.wins_x += 1,
            GameStatus::Won(Mark::O) => self.wins_o += 1,
            GameStatus::Tied => self.ties += 1,
            GameStatus::Won(Mark::Empty) | GameStatus::InProgress => return,
        }
        self.games_played += 1;
    }

    /// Zeroes every counter once the session limit is reached. Returns true
    /// when the counters were reset.
    pub fn roll_over_if_needed(&mut self, max_games: u32) -> bool {
        if self.games_played >= max_games.max(MIN_MAX_GAMES) {
            *self = Self::new();
            true
        } else {
            false
        }
    }

    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.wins_x,
            Mark::O => self.wins_o,
            Mark::Empty => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_results() {
        let mut scores = Scoreboard::new();
        scores.record(GameStatus::Won(Mark::X));
        scores.record(GameStatus::Won(Mark::O));
        scores.record(GameStatus::Won(Mark::X));
        scores.record(GameStatus::Tied);

        assert_eq!(scores.wins(Mark::X), 2);
        assert_eq!(scores.wins(Mark::O), 1);
        assert_eq!(scores.ties, 1);
        assert_eq!(scores.games_played, 4);
    }

    #[test]
    fn test_in_progress_is_not_counted() {
        let mut scores = Scoreboard::new();
        scores.record(GameStatus::InProgress);
        assert_eq!(scores, Scoreboard::new());
    }

    #[test]
    fn test_roll_over_at_limit() {
        let mut scores = Scoreboard::new();
        scores.record(GameStatus::Tied);
        assert!(!scores.roll_over_if_needed(2));
        assert_eq!(scores.games_played, 1);

        scores.record(GameStatus::Won(Mark::O));
        assert!(scores.roll_over_if_needed(2));
        assert_eq!(scores, Scoreboard::new());
    }

    #[test]
    fn test_zero_limit_is_treated_as_one() {
        let mut scores = Scoreboard::new();
        assert!(!scores.roll_over_if_needed(0));
        scores.record(GameStatus::Tied);
        assert!(scores.roll_over_if_needed(0));
    }
}
