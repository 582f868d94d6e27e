//! Adversarial search: minimax with alpha-beta pruning.
//!
//! X maximizes and O minimizes the terminal utility (+1 X win, -1 O win,
//! 0 draw). [`best_move`] first resolves forced tactics through
//! [`immediate_winning_moves`] and only then runs the full search. The
//! unpruned [`max_value`]/[`min_value`] pair is kept alongside the
//! alpha-beta pair so tests can verify that pruning never changes values.

use std::collections::HashSet;

use super::{
    board::{Action, Board, Player},
    lines::LineAnalyzer,
};

/// All coordinates where placing `side`'s mark would complete a line.
///
/// This probes "what if `side` played here" regardless of whose turn the
/// board says it is, so it works both for finding one's own winning move
/// and for spotting the opponent's threat to block.
pub fn immediate_winning_moves(board: &Board, side: Player) -> HashSet<Action> {
    LineAnalyzer::winning_moves(board.grid(), side)
}

/// Terminal utility from X's perspective; callers check terminality first.
fn terminal_value(board: &Board) -> i32 {
    match board.winner() {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

fn apply_enumerated(board: &Board, action: Action) -> Board {
    board
        .apply(action)
        .expect("enumerated empty cell should be a legal move")
}

/// Compute the optimal action for the side to move, or `None` on a
/// terminal board.
///
/// Forced tactics short-circuit the search: an immediate winning move for
/// the side to move is taken outright, and failing that, an immediate
/// winning move for the opponent is blocked. Otherwise the position is
/// solved with alpha-beta, breaking ties toward the first action in
/// row-major enumeration order and stopping early once a proven win for
/// the side to move is found.
pub fn best_move(board: &Board) -> Option<Action> {
    if board.is_terminal() {
        return None;
    }

    let current = board.side_to_move();

    // Take our own win before blocking the opponent's. Blocking first would
    // decline an available win whenever both sides threaten a line.
    let own_wins = immediate_winning_moves(board, current);
    if !own_wins.is_empty() {
        return board.empty_cells().into_iter().find(|a| own_wins.contains(a));
    }

    let opponent_wins = immediate_winning_moves(board, current.opponent());
    if !opponent_wins.is_empty() {
        return board
            .empty_cells()
            .into_iter()
            .find(|a| opponent_wins.contains(a));
    }

    match current {
        Player::X => {
            let mut v = i32::MIN;
            let mut best = None;
            for action in board.empty_cells() {
                let value = min_value_ab(&apply_enumerated(board, action), v, i32::MAX);
                if value > v {
                    v = value;
                    best = Some(action);
                    if v == 1 {
                        break;
                    }
                }
            }
            best
        }
        Player::O => {
            let mut v = i32::MAX;
            let mut best = None;
            for action in board.empty_cells() {
                let value = max_value_ab(&apply_enumerated(board, action), i32::MIN, v);
                if value < v {
                    v = value;
                    best = Some(action);
                    if v == -1 {
                        break;
                    }
                }
            }
            best
        }
    }
}

/// Unpruned minimax value with X to move
pub fn max_value(board: &Board) -> i32 {
    if board.is_terminal() {
        return terminal_value(board);
    }
    let mut v = i32::MIN;
    for action in board.empty_cells() {
        v = v.max(min_value(&apply_enumerated(board, action)));
    }
    v
}

/// Unpruned minimax value with O to move
pub fn min_value(board: &Board) -> i32 {
    if board.is_terminal() {
        return terminal_value(board);
    }
    let mut v = i32::MAX;
    for action in board.empty_cells() {
        v = v.min(max_value(&apply_enumerated(board, action)));
    }
    v
}

/// Alpha-beta value with X to move.
///
/// `alpha` is the best value already guaranteed to the maximizer along the
/// current path, `beta` the best guaranteed to the minimizer. Remaining
/// actions are skipped once `alpha >= beta` (beta cutoff).
pub fn max_value_ab(board: &Board, mut alpha: i32, beta: i32) -> i32 {
    if board.is_terminal() {
        return terminal_value(board);
    }
    let mut v = i32::MIN;
    for action in board.empty_cells() {
        v = v.max(min_value_ab(&apply_enumerated(board, action), alpha, beta));
        alpha = alpha.max(v);
        if alpha >= beta {
            break;
        }
    }
    v
}

/// Alpha-beta value with O to move; symmetric with an alpha cutoff.
pub fn min_value_ab(board: &Board, alpha: i32, mut beta: i32) -> i32 {
    if board.is_terminal() {
        return terminal_value(board);
    }
    let mut v = i32::MAX;
    for action in board.empty_cells() {
        v = v.min(max_value_ab(&apply_enumerated(board, action), alpha, beta));
        beta = beta.min(v);
        if alpha >= beta {
            break;
        }
    }
    v
}
