//! Adversarial game solving and link-graph ranking
//!
//! This crate provides:
//! - A complete Tic-Tac-Toe model with minimax/alpha-beta optimal play
//! - PageRank estimation over directed link graphs, by Markov-chain
//!   sampling and by power iteration
//! - HTML corpus ingestion producing the link graphs the estimators consume

pub mod cli;
pub mod corpus;
pub mod error;
pub mod pagerank;
pub mod tictactoe;

pub use error::{Error, Result};
pub use pagerank::{
    CONVERGENCE_TOLERANCE, LinkGraph, PageRankConfig, iterate_pagerank, sample_pagerank,
    transition_probabilities,
};
pub use tictactoe::{Action, Board, Cell, Player, best_move, immediate_winning_moves};
