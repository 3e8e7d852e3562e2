use super::board::Board;
use super::types::{Line, Mark, WinningLine};

/// Rows, then columns, then diagonals. The order decides which line is
/// reported when a board holds more than one.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// First completed line in [`LINES`] order. Board legality is not checked, so
/// impossible boards are evaluated like any other.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            Some(WinningLine::new(mark, line))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|winning| winning.mark)
}

pub fn is_board_full(board: &Board) -> bool {
    board.is_full()
}
