mod board;
mod bot_controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, CENTER, CORNERS, SIDES};
pub use bot_controller::{BotInput, calculate_move};
pub use game_state::TicTacToeGameState;
pub use settings::TicTacToeSettings;
pub use types::{FirstPlayerMode, GameStatus, Line, Mark, WinningLine};
pub use win_detector::{LINES, check_win, check_win_with_line, is_board_full};
