//! CLI commands

pub mod rank;
pub mod solve;
