use std::fmt;

use super::board::Cell;

/// One of the two sides. Red moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// The opposing player.
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// The cell value this player's tokens occupy.
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Red.opponent(), Player::Yellow);
        assert_eq!(Player::Yellow.opponent(), Player::Red);
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(Player::Red.to_cell(), Cell::Red);
        assert_eq!(Player::Yellow.to_cell(), Cell::Yellow);
    }

    #[test]
    fn test_display() {
        assert_eq!(Player::Red.to_string(), "Red");
        assert_eq!(Player::Yellow.to_string(), "Yellow");
    }
}
