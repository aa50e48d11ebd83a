//! Run detection: does a token have `len` cells in a straight line?
//!
//! Two variants: a full-board scan used for authoritative end-of-turn win
//! checks, and a restricted scan that only reports runs passing through a
//! given cell, used by the computer player to evaluate hypothetical drops.

use super::{Board, Cell};

/// Forward scan rays: east, south-east, south, south-west. Every straight
/// run is found from its northern/western end along exactly one of these.
const RAYS: [(isize, isize); 4] = [(0, 1), (1, 1), (1, 0), (1, -1)];

/// True when `token` has `len` consecutive cells anywhere on the board.
///
/// Runs shorter than 2 never count, whatever the board looks like.
pub fn has_run(board: &Board, token: Cell, len: usize) -> bool {
    if len < 2 {
        return false;
    }

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if board.get(row, col) != token {
                continue;
            }
            for &(dr, dc) in &RAYS {
                if !ray_fits(board, row, col, dr, dc, len) {
                    continue;
                }
                if (1..len).all(|step| {
                    let (r, c) = ray_cell(row, col, dr, dc, step);
                    board.get(r, c) == token
                }) {
                    return true;
                }
            }
        }
    }
    false
}

/// True when `token` has a `len`-run that contains the target cell exactly
/// once.
///
/// This is the incremental check after a single drop: it detects runs the
/// new token is part of, and ignores runs that were already on the board
/// before the drop. The boolean result does not depend on scan order.
pub fn has_run_through(
    board: &Board,
    token: Cell,
    len: usize,
    target_row: usize,
    target_col: usize,
) -> bool {
    if len < 2 {
        return false;
    }

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if board.get(row, col) != token {
                continue;
            }
            for &(dr, dc) in &RAYS {
                if !ray_fits(board, row, col, dr, dc, len) {
                    continue;
                }

                let mut target_hits = 0;
                let mut complete = true;
                for step in 0..len {
                    let (r, c) = ray_cell(row, col, dr, dc, step);
                    if (r, c) == (target_row, target_col) {
                        target_hits += 1;
                    }
                    if board.get(r, c) != token {
                        complete = false;
                        break;
                    }
                }
                if complete && target_hits == 1 {
                    return true;
                }
            }
        }
    }
    false
}

/// Whether a run of `len` starting at (row, col) stays on the board along
/// (dr, dc). The ray is monotonic, so checking the end point is enough.
fn ray_fits(board: &Board, row: usize, col: usize, dr: isize, dc: isize, len: usize) -> bool {
    let steps = len as isize - 1;
    let end_row = row as isize + dr * steps;
    let end_col = col as isize + dc * steps;
    end_row >= 0
        && end_row < board.rows() as isize
        && end_col >= 0
        && end_col < board.cols() as isize
}

fn ray_cell(row: usize, col: usize, dr: isize, dc: isize, step: usize) -> (usize, usize) {
    (
        (row as isize + dr * step as isize) as usize,
        (col as isize + dc * step as isize) as usize,
    )
}
