//! Tic-Tac-Toe game model and adversarial search

pub mod board;
pub mod lines;
pub mod search;

pub use board::{Action, Board, Cell, Player};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use search::{
    best_move, immediate_winning_moves, max_value, max_value_ab, min_value, min_value_ab,
};
