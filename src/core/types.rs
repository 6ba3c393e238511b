use serde::{Deserialize, Serialize};
use std::fmt;

/// Player mark. X moves first and is the maximizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Default for Mark {
    fn default() -> Self {
        Mark::X
    }
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn is_maximizer(self) -> bool {
        self == Mark::X
    }

    pub fn display_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_char())
    }
}

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Mark),
}

impl Cell {
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Taken(m) => Some(m),
        }
    }

    pub fn display_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Taken(m) => m.display_char(),
        }
    }
}

/// Game-theoretic value from X's point of view: +1, 0 or -1.
pub type Score = i32;

/// 盤面の評価結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Mark),
    Draw,
    Undecided,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Undecided
    }

    /// Score of a terminal outcome. `Undecided` has no value of its own.
    pub fn score(self) -> Option<Score> {
        match self {
            Outcome::Win(Mark::X) => Some(1),
            Outcome::Win(Mark::O) => Some(-1),
            Outcome::Draw => Some(0),
            Outcome::Undecided => None,
        }
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(m) => Some(m),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Win(m) => write!(f, "{} wins!", m),
            Outcome::Draw => write!(f, "It's a draw!"),
            Outcome::Undecided => write!(f, "Game in progress"),
        }
    }
}
