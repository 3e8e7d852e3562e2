use super::types::Mark;

pub const CELL_COUNT: usize = 9;
pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];
pub const SIDES: [usize; 4] = [1, 3, 5, 7];

/// 3x3 board stored row-major: indices 0-2 are the top row, 6-8 the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Builds a board from a 9 character pattern: `C` cow, `M` milk, anything
    /// else empty. Whitespace is ignored so rows can be spaced out.
    #[cfg(test)]
    pub(crate) fn from_pattern(pattern: &str) -> Self {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let marks = pattern.chars().filter(|c| !c.is_whitespace());
        for (i, c) in marks.enumerate() {
            cells[i] = match c {
                'C' => Mark::Cow,
                'M' => Mark::Milk,
                _ => Mark::Empty,
            };
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    /// Returns a copy of the board with `mark` written at `index`, or `None`
    /// when `index` is off the board. Occupied cells are overwritten.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Board> {
        let mut cells = self.cells;
        *cells.get_mut(index)? = mark;
        Some(Board { cells })
    }

    pub fn get_available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_all_moves() {
        let board = Board::empty();
        assert_eq!(board.get_available_moves(), (0..CELL_COUNT).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::empty();
        let next = board.with_mark(4, Mark::Cow).unwrap();
        assert_eq!(board.get(4), Some(Mark::Empty));
        assert_eq!(next.get(4), Some(Mark::Cow));
        assert_eq!(next.count(Mark::Cow), 1);
    }

    #[test]
    fn test_with_mark_off_the_board() {
        let board = Board::from_pattern("C__ _M_ ___");
        assert_eq!(board.with_mark(CELL_COUNT, Mark::Cow), None);
        assert_eq!(board.with_mark(usize::MAX, Mark::Milk), None);
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::empty();
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty_at(9));
    }

    #[test]
    fn test_available_moves_skip_marked_cells() {
        let board = Board::from_pattern("CM_ _C_ __M");
        assert_eq!(board.get_available_moves(), vec![2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_pattern("CMC MCM MCM");
        assert!(board.is_full());
        assert!(board.get_available_moves().is_empty());
    }
}
