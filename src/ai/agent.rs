use crate::game::GameState;

/// A source of moves for one side of the game.
///
/// Implementations must return a column that currently accepts a drop;
/// the turn coordinator applies the move without re-validating it.
pub trait Agent {
    /// Select a column for the current player of `state`.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// The agent's display name.
    fn name(&self) -> &str;
}
