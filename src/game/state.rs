use crate::error::MoveError;

use super::{has_run, Board, Player, CONNECT_N};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// The turn state machine. Owns the board for the lifetime of a game;
/// alternates players until a win or a full board, after which further
/// moves are rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create the initial state for an empty rows×cols board.
    pub fn new(rows: usize, cols: usize) -> Self {
        GameState {
            board: Board::new(rows, cols),
            current_player: Player::Red, // Red starts
            outcome: None,
        }
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns that currently accept a drop; empty once the game is over.
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.board.cols())
            .filter(|&col| self.board.can_accept(col))
            .collect()
    }

    /// Apply the current player's move: drop the token, check for a win,
    /// then for a draw, and hand the turn over.
    pub fn apply_move(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let token = self.current_player.to_cell();
        self.board.drop_piece(column, token)?;

        // The anywhere-scan is the authority for end-of-turn win detection:
        // any winning configuration for the mover counts.
        if has_run(&self.board, token, CONNECT_N) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.opponent();
        Ok(())
    }
}
