//! Solve command - Compute the optimal move for a Tic-Tac-Toe position

use anyhow::{Context, Result};
use clap::Parser;

use crate::tictactoe::{Board, Player, best_move, max_value_ab, min_value_ab};

#[derive(Parser, Debug)]
#[command(about = "Compute the optimal move for a Tic-Tac-Toe position")]
pub struct SolveArgs {
    /// Board as 9 cells in row-major order ('.', 'X', 'O'), e.g. "XO..X...."
    pub board: String,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("failed to parse board '{}'", args.board))?;

    println!("{board}\n");

    if board.is_terminal() {
        match board.winner() {
            Some(winner) => println!("Game over: {winner} has won"),
            None => println!("Game over: draw"),
        }
        return Ok(());
    }

    let side = board.side_to_move();
    let value = match side {
        Player::X => max_value_ab(&board, i32::MIN, i32::MAX),
        Player::O => min_value_ab(&board, i32::MIN, i32::MAX),
    };
    let action = best_move(&board).expect("non-terminal board has an optimal move");

    println!("Side to move: {side}");
    println!("Optimal move: {action}");
    println!(
        "Value with optimal play: {} ({})",
        value,
        match value {
            1 => "X wins",
            -1 => "O wins",
            _ => "draw",
        }
    );

    Ok(())
}
