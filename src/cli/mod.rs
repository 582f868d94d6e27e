//! CLI infrastructure for the arbiter toolkit
//!
//! This module provides the command-line interface for ranking corpora and
//! solving Tic-Tac-Toe positions.

pub mod commands;
