use crate::game::{column_order, has_run_through, Board, Cell, GameState, CONNECT_N};

use super::agent::Agent;

/// Computer player driven by a fixed priority chain:
///
/// 1. take an own winning move;
/// 2. block an opponent winning move;
/// 3. build an own run of three;
/// 4. block an opponent run of three;
/// 5. otherwise the most central open column.
///
/// Every level tries the columns center-out (left on ties), so equal-priority
/// candidates resolve to the most central, left-biased column.
pub struct HeuristicAgent {
    order: Vec<usize>,
}

impl HeuristicAgent {
    /// Build an agent for a board `cols` wide. The column visitation order
    /// is computed once and fixed for the lifetime of the agent.
    pub fn new(cols: usize) -> Self {
        HeuristicAgent {
            order: column_order(cols),
        }
    }

    /// First column in the visitation order where dropping `token` completes
    /// a run of `len`. Each probe drops the token, checks for a run through
    /// the landing cell, and lifts it again, leaving the board exactly as it
    /// was.
    fn run_completing_move(&self, board: &mut Board, token: Cell, len: usize) -> Option<usize> {
        for &col in &self.order {
            let row = match board.drop_piece(col, token) {
                Ok(row) => row,
                // Full column: no run is possible here this turn
                Err(_) => continue,
            };
            let completes = has_run_through(board, token, len, row, col);
            board
                .lift_piece(col)
                .expect("column was just dropped into");
            if completes {
                return Some(col);
            }
        }
        None
    }
}

impl Agent for HeuristicAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        assert!(
            !state.board().is_full(),
            "select_action called on a full board"
        );

        let own = state.current_player().to_cell();
        let opponent = state.current_player().opponent().to_cell();

        // Probe on a scratch copy so the caller's state is never touched.
        let mut board = state.board().clone();

        if let Some(col) = self.run_completing_move(&mut board, own, CONNECT_N) {
            return col;
        }
        if let Some(col) = self.run_completing_move(&mut board, opponent, CONNECT_N) {
            return col;
        }
        if let Some(col) = self.run_completing_move(&mut board, own, 3) {
            return col;
        }
        if let Some(col) = self.run_completing_move(&mut board, opponent, 3) {
            return col;
        }

        for &col in &self.order {
            if board.can_accept(col) {
                return col;
            }
        }

        unreachable!("board was not full, some column must accept a drop");
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
