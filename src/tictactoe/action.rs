//! Board coordinates chosen by a player

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::board::SIZE;

/// A zero-based (row, column) pair naming a cell.
///
/// An action is only meaningful relative to a board: it is legal when the
/// cell it names is in range and empty. Ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub const fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }

    /// Action for a row-major cell index (0-8)
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SIZE * SIZE).then(|| Action::new(index / SIZE, index % SIZE))
    }

    /// Row-major cell index, `None` when the action is off the board
    pub fn index(self) -> Option<usize> {
        self.is_in_bounds().then(|| self.row * SIZE + self.col)
    }

    pub fn is_in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// All nine cells in row-major order
    pub fn all() -> impl Iterator<Item = Action> {
        (0..SIZE * SIZE).map(|i| Action::new(i / SIZE, i % SIZE))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Action {
    type Err = crate::Error;

    /// Parse `"r,c"`, `"r c"` or a single index `"0"`..`"8"`.
    ///
    /// Out-of-range coordinates parse fine; legality is checked when the
    /// action is applied to a board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || crate::Error::InvalidAction {
            input: s.to_string(),
        };

        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [index] => {
                let index: usize = index.parse().map_err(|_| invalid())?;
                Action::from_index(index).ok_or_else(invalid)
            }
            [row, col] => {
                let row = row.parse().map_err(|_| invalid())?;
                let col = col.parse().map_err(|_| invalid())?;
                Ok(Action::new(row, col))
            }
            _ => Err(invalid()),
        }
    }
}
