use super::types::{BOARD_SIZE, Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from nine cells listed row by row.
    pub fn from_cells(cells: [Mark; BOARD_SIZE * BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (idx, mark) in cells.into_iter().enumerate() {
            board.cells[idx / BOARD_SIZE][idx % BOARD_SIZE] = mark;
        }
        board
    }

    pub fn get(&self, position: Position) -> Mark {
        self.cells[position.row][position.col]
    }

    pub fn set(&mut self, position: Position, mark: Mark) {
        self.cells[position.row][position.col] = mark;
    }

    pub fn positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Self::positions()
            .filter(|&pos| self.get(pos) == Mark::Empty)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    pub fn clear(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_positions().len(), 9);
        assert!(!board.is_full());
        assert_eq!(board.count(Mark::X), 0);
    }

    #[test]
    fn test_from_cells_is_row_major() {
        let board = Board::from_cells([
            X, E, E,
            E, E, O,
            E, E, E,
        ]);
        assert_eq!(board.get(Position::new(0, 0)), Mark::X);
        assert_eq!(board.get(Position::new(1, 2)), Mark::O);
        assert_eq!(board.get(Position::new(2, 1)), Mark::Empty);
    }

    #[test]
    fn test_empty_positions_are_row_major() {
        let board = Board::from_cells([
            X, O, E,
            O, E, X,
            E, X, O,
        ]);
        assert_eq!(
            board.empty_positions(),
            vec![Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)]
        );
    }

    #[test]
    fn test_full_board_and_clear() {
        let mut board = Board::from_cells([
            X, O, X,
            X, O, O,
            O, X, X,
        ]);
        assert!(board.is_full());
        assert_eq!(board.count(Mark::X), 5);
        assert_eq!(board.count(Mark::O), 4);

        board.clear();
        assert_eq!(board, Board::new());
    }
}
