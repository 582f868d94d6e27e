//! PageRank estimation over directed link graphs

pub mod estimators;
pub mod graph;
pub mod transition;

pub use estimators::{CONVERGENCE_TOLERANCE, PageRankConfig, iterate_pagerank, sample_pagerank};
pub use graph::LinkGraph;
pub use transition::transition_probabilities;
