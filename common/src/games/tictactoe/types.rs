use serde::{Deserialize, Serialize};
use std::fmt;

/// Three cell indices that win when they all hold the same mark.
pub type Line = [usize; 3];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    Cow,
    Milk,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::Cow => Some(Mark::Milk),
            Mark::Milk => Some(Mark::Cow),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Empty => write!(f, "Empty"),
            Mark::Cow => write!(f, "Cow"),
            Mark::Milk => write!(f, "Milk"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    CowWon,
    MilkWon,
    Draw,
}

impl GameStatus {
    pub fn won_by(mark: Mark) -> Option<GameStatus> {
        match mark {
            Mark::Cow => Some(GameStatus::CowWon),
            Mark::Milk => Some(GameStatus::MilkWon),
            Mark::Empty => None,
        }
    }
}

/// Who places the first mark of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    #[default]
    Human,
    Computer,
    Random,
}

/// A completed line and the mark occupying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub line: Line,
}

impl WinningLine {
    pub fn new(mark: Mark, line: Line) -> Self {
        Self { mark, line }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}
