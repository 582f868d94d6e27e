//! Winning line analysis for Tic-Tac-Toe

use std::collections::HashSet;

use super::board::{Action, Cell, Player, SIZE};

/// Winning line coordinates on the 3x3 board, in scan order:
/// rows, then columns, then diagonals.
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[[Cell; SIZE]; SIZE], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&(r, c)| cells[r][c] == target))
    }

    /// Find all coordinates that would immediately win for the player
    pub fn winning_moves(cells: &[[Cell; SIZE]; SIZE], player: Player) -> HashSet<Action> {
        let mut moves = HashSet::new();
        for &line in &WINNING_LINES {
            if let Some(action) = Self::completing_move_in_line(cells, player, &line) {
                moves.insert(action);
            }
        }
        moves
    }

    /// Find the winning move in a specific line, if one exists
    /// (two of the player's marks with one empty cell)
    fn completing_move_in_line(
        cells: &[[Cell; SIZE]; SIZE],
        player: Player,
        line: &[(usize, usize); 3],
    ) -> Option<Action> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty = None;

        for &(r, c) in line {
            match cells[r][c] {
                Cell::Empty => {
                    if empty.is_some() {
                        // More than one empty cell, not a winning move
                        return None;
                    }
                    empty = Some(Action::new(r, c));
                }
                cell if cell == target => count += 1,
                _ => return None, // Opponent piece in line
            }
        }

        if count == 2 { empty } else { None }
    }
}
