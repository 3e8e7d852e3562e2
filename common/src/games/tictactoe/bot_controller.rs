use crate::games::RandomSource;
use super::board::{Board, CENTER, CORNERS, SIDES};
use super::game_state::TicTacToeGameState;
use super::types::Mark;
use super::win_detector::check_win;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
    pub opponent_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board,
            bot_mark: state.computer_mark,
            opponent_mark: state.human_mark,
        }
    }
}

/// Picks the computer's next cell: win now, block the opponent, center, a
/// random corner, a random side. `None` only when the board is full.
///
/// This looks a single ply ahead and can be beaten; the rule order is part of
/// how the opponent plays and must stay as it is.
pub fn calculate_move<R>(input: &BotInput, rng: &mut R) -> Option<usize>
where
    R: RandomSource + ?Sized,
{
    let board = &input.board;

    if let Some(index) = find_winning_move(board, input.bot_mark) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(board, input.opponent_mark) {
        return Some(index);
    }

    if board.is_empty_at(CENTER) {
        return Some(CENTER);
    }

    if let Some(index) = pick_random_empty(board, &CORNERS, rng) {
        return Some(index);
    }

    pick_random_empty(board, &SIDES, rng)
}

/// Lowest empty index where placing `mark` completes a line for `mark`.
fn find_winning_move(board: &Board, mark: Mark) -> Option<usize> {
    board
        .get_available_moves()
        .into_iter()
        .find(|&index| board.with_mark(index, mark).and_then(|b| check_win(&b)) == Some(mark))
}

fn pick_random_empty<R>(board: &Board, candidates: &[usize], rng: &mut R) -> Option<usize>
where
    R: RandomSource + ?Sized,
{
    let available: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&index| board.is_empty_at(index))
        .collect();

    if available.is_empty() {
        return None;
    }

    Some(available[rng.random_index(available.len())])
}
