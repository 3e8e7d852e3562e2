use crate::games::RandomSource;
use crate::log;
use super::board::{Board, CELL_COUNT};
use super::bot_controller::{BotInput, calculate_move};
use super::settings::TicTacToeSettings;
use super::types::{FirstPlayerMode, GameStatus, Line, Mark};
use super::win_detector::check_win_with_line;

/// One human-vs-computer game. Every transition returns a new state and leaves
/// `self` untouched, so the caller decides what "current" is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub human_mark: Mark,
    pub computer_mark: Mark,
    pub first_player: FirstPlayerMode,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub winning_line: Option<Line>,
    pub last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new<R>(settings: &TicTacToeSettings, rng: &mut R) -> Result<Self, String>
    where
        R: RandomSource + ?Sized,
    {
        let computer_mark = settings
            .computer_mark()
            .ok_or_else(|| "Human mark must be Cow or Milk".to_string())?;

        let state = Self {
            board: Board::empty(),
            human_mark: settings.human_mark,
            computer_mark,
            first_player: settings.first_player,
            current_mark: starting_mark(
                settings.first_player,
                settings.human_mark,
                computer_mark,
                rng,
            ),
            status: GameStatus::InProgress,
            winning_line: None,
            last_move: None,
        };

        log!(
            "New game: human plays {}, {} moves first",
            state.human_mark,
            state.current_mark
        );
        Ok(state)
    }

    pub fn place_human_mark(&self, index: usize) -> Result<Self, String> {
        if self.is_game_over() {
            return Err("Game is already over".to_string());
        }
        if self.is_computer_turn() {
            return Err("Not your turn".to_string());
        }
        self.place_mark(self.human_mark, index)
    }

    pub fn play_computer_turn<R>(&self, rng: &mut R) -> Result<Self, String>
    where
        R: RandomSource + ?Sized,
    {
        if self.is_game_over() {
            return Err("Game is already over".to_string());
        }
        if !self.is_computer_turn() {
            return Err("Not the computer's turn".to_string());
        }

        let index = calculate_move(&BotInput::from_game_state(self), rng)
            .ok_or_else(|| "Computer has no legal move".to_string())?;
        self.place_mark(self.computer_mark, index)
    }

    /// Fresh board with the same marks. A random first player is drawn again.
    pub fn reset<R>(&self, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        Self {
            board: Board::empty(),
            current_mark: starting_mark(
                self.first_player,
                self.human_mark,
                self.computer_mark,
                rng,
            ),
            status: GameStatus::InProgress,
            winning_line: None,
            last_move: None,
            ..*self
        }
    }

    fn place_mark(&self, mark: Mark, index: usize) -> Result<Self, String> {
        if self.is_game_over() {
            return Err("Game is already over".to_string());
        }
        if index >= CELL_COUNT {
            return Err("Position out of bounds".to_string());
        }
        if !self.board.is_empty_at(index) {
            return Err("Cell is already marked".to_string());
        }

        let board = self
            .board
            .with_mark(index, mark)
            .ok_or_else(|| "Position out of bounds".to_string())?;
        let mut next = Self {
            board,
            last_move: Some(index),
            ..*self
        };
        next.check_game_over();

        if next.status == GameStatus::InProgress {
            next.switch_turn();
        }

        Ok(next)
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == self.human_mark {
            self.computer_mark
        } else {
            self.human_mark
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winning) = check_win_with_line(&self.board)
            && let Some(status) = GameStatus::won_by(winning.mark)
        {
            self.status = status;
            self.winning_line = Some(winning.line);
            log!("{} wins on {:?}", winning.mark, winning.line);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            log!("Game ended in a draw");
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn is_computer_turn(&self) -> bool {
        self.current_mark == self.computer_mark
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::CowWon => Some(Mark::Cow),
            GameStatus::MilkWon => Some(Mark::Milk),
            _ => None,
        }
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&index))
    }

    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::CowWon | GameStatus::MilkWon => {
                format!("Winner: {}", self.winner().unwrap_or(Mark::Empty))
            }
            GameStatus::Draw => "Draw!".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.current_mark),
        }
    }
}

fn starting_mark<R>(
    first_player: FirstPlayerMode,
    human_mark: Mark,
    computer_mark: Mark,
    rng: &mut R,
) -> Mark
where
    R: RandomSource + ?Sized,
{
    let human_starts = match first_player {
        FirstPlayerMode::Human => true,
        FirstPlayerMode::Computer => false,
        FirstPlayerMode::Random => rng.random_bool(),
    };
    if human_starts { human_mark } else { computer_mark }
}
