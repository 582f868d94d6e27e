//! Rank estimators: Markov-chain sampling and power iteration

use std::collections::BTreeMap;

use rand::{Rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use super::{
    graph::LinkGraph,
    transition::{transition_probabilities, validate_damping},
};

/// L-infinity stopping tolerance for [`iterate_pagerank`]: iteration ends
/// once no page's rank moves by this much between rounds.
pub const CONVERGENCE_TOLERANCE: f64 = 0.001;

/// Estimator parameters.
///
/// An explicit configuration value rather than ambient constants, so tests
/// and callers can vary the parameters without process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageRankConfig {
    /// Probability of following an outgoing link instead of jumping to a
    /// uniformly random page
    pub damping: f64,
    /// Number of samples drawn by the sampling estimator
    pub samples: usize,
}

impl PageRankConfig {
    pub fn new(damping: f64, samples: usize) -> Self {
        PageRankConfig { damping, samples }
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }
}

impl Default for PageRankConfig {
    fn default() -> Self {
        PageRankConfig {
            damping: 0.85,
            samples: 10_000,
        }
    }
}

/// Estimate ranks by simulating the random surfer for `samples` steps.
///
/// The chain starts on a uniformly random page and takes `samples - 1`
/// transitions, each drawn from [`transition_probabilities`] of the current
/// page. A page's rank is its visit count divided by `samples`, so the
/// estimates sum to 1 by construction. The generator is injected so seeded
/// runs are reproducible.
///
/// # Errors
///
/// Returns error if the graph is empty, `damping` lies outside [0, 1], or
/// `samples` is zero (a single sample is the minimum estimate).
pub fn sample_pagerank<R: Rng + ?Sized>(
    graph: &LinkGraph,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<BTreeMap<String, f64>, crate::Error> {
    validate_damping(damping)?;
    if graph.is_empty() {
        return Err(crate::Error::EmptyGraph);
    }
    if samples < 1 {
        return Err(crate::Error::InvalidSampleCount { samples });
    }

    let pages: Vec<&str> = graph.pages().collect();
    let mut visits: BTreeMap<&str, usize> = pages.iter().map(|&p| (p, 0)).collect();

    let mut current = pages
        .choose(rng)
        .expect("non-empty graph has at least one page")
        .to_string();
    *visits.get_mut(current.as_str()).expect("start page is a key") += 1;

    for _ in 1..samples {
        let distribution = transition_probabilities(graph, &current, damping)?;
        let weighted: Vec<(String, f64)> = distribution.into_iter().collect();
        let (next, _) = weighted
            .choose_weighted(rng, |(_, weight)| *weight)
            .expect("transition distribution has positive total weight");
        current = next.clone();
        *visits
            .get_mut(current.as_str())
            .expect("transition targets are pages") += 1;
    }

    let total = samples as f64;
    Ok(visits
        .into_iter()
        .map(|(page, count)| (page.to_string(), count as f64 / total))
        .collect())
}

/// Estimate ranks by power iteration until convergence.
///
/// Every page starts at 1/M. Each round recomputes every rank from the
/// previous round's snapshot: a page receives `(1 - damping)/M` plus the
/// damped contributions `rank[q]/out_degree(q)` from each page q linking to
/// it, where a page with no outgoing links contributes `rank[q]/M` to every
/// page (its mass is redistributed uniformly). Updates never read a
/// partially updated vector. Iteration stops once every rank changes by
/// less than [`CONVERGENCE_TOLERANCE`]; with damping below 1 the jump term
/// makes the chain ergodic, so the iteration converges for any graph.
///
/// # Errors
///
/// Returns error if the graph is empty or `damping` lies outside [0, 1].
pub fn iterate_pagerank(
    graph: &LinkGraph,
    damping: f64,
) -> Result<BTreeMap<String, f64>, crate::Error> {
    validate_damping(damping)?;
    if graph.is_empty() {
        return Err(crate::Error::EmptyGraph);
    }

    let total_pages = graph.page_count() as f64;
    let base = (1.0 - damping) / total_pages;

    let mut ranks: BTreeMap<String, f64> = graph
        .pages()
        .map(|page| (page.to_string(), 1.0 / total_pages))
        .collect();

    loop {
        let mut next = BTreeMap::new();
        for page in graph.pages() {
            let mut contribution = 0.0;
            for (source, targets) in graph.iter() {
                if targets.is_empty() {
                    contribution += ranks[source] / total_pages;
                } else if targets.contains(page) {
                    contribution += ranks[source] / targets.len() as f64;
                }
            }
            next.insert(page.to_string(), base + damping * contribution);
        }

        let converged = next
            .iter()
            .all(|(page, rank)| (rank - ranks[page.as_str()]).abs() < CONVERGENCE_TOLERANCE);
        ranks = next;
        if converged {
            return Ok(ranks);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn graph(entries: &[(&str, &[&str])]) -> LinkGraph {
        let raw: HashMap<String, HashSet<String>> = entries
            .iter()
            .map(|(page, targets)| {
                (
                    page.to_string(),
                    targets.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect();
        LinkGraph::from_links(raw)
    }

    #[test]
    fn test_default_config_matches_reference_constants() {
        let config = PageRankConfig::default();
        assert_eq!(config.damping, 0.85);
        assert_eq!(config.samples, 10_000);
    }

    #[test]
    fn test_two_page_cycle_converges_to_half_each() {
        let g = graph(&[("p1", &["p2"]), ("p2", &["p1"])]);
        let ranks = iterate_pagerank(&g, 0.85).unwrap();
        assert!((ranks["p1"] - 0.5).abs() < CONVERGENCE_TOLERANCE);
        assert!((ranks["p2"] - 0.5).abs() < CONVERGENCE_TOLERANCE);
    }

    #[test]
    fn test_iterated_ranks_sum_to_one() {
        let g = graph(&[
            ("1", &["2"]),
            ("2", &["1", "3"]),
            ("3", &["2", "4"]),
            ("4", &[]),
        ]);
        let ranks = iterate_pagerank(&g, 0.85).unwrap();
        let total: f64 = ranks.values().sum();
        assert!((total - 1.0).abs() < 1e-6, "ranks summed to {total}");
    }

    #[test]
    fn test_sampled_ranks_sum_to_one() {
        let g = graph(&[("1", &["2"]), ("2", &["1", "3"]), ("3", &[])]);
        let mut rng = StdRng::seed_from_u64(42);
        let ranks = sample_pagerank(&g, 0.85, 2_000, &mut rng).unwrap();
        let total: f64 = ranks.values().sum();
        assert!((total - 1.0).abs() < 1e-6, "ranks summed to {total}");
    }

    #[test]
    fn test_sampling_tracks_iteration() {
        let g = graph(&[
            ("1", &["2"]),
            ("2", &["1", "3"]),
            ("3", &["2", "4"]),
            ("4", &["2"]),
        ]);
        let mut rng = StdRng::seed_from_u64(7);
        let sampled = sample_pagerank(&g, 0.85, 50_000, &mut rng).unwrap();
        let iterated = iterate_pagerank(&g, 0.85).unwrap();
        for page in ["1", "2", "3", "4"] {
            assert!(
                (sampled[page] - iterated[page]).abs() < 0.02,
                "page {page}: sampled {} vs iterated {}",
                sampled[page],
                iterated[page]
            );
        }
    }

    #[test]
    fn test_sampling_is_reproducible_under_a_seed() {
        let g = graph(&[("1", &["2"]), ("2", &["1"])]);
        let mut rng1 = StdRng::seed_from_u64(12345);
        let mut rng2 = StdRng::seed_from_u64(12345);
        let a = sample_pagerank(&g, 0.85, 500, &mut rng1).unwrap();
        let b = sample_pagerank(&g, 0.85, 500, &mut rng2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_sample_is_accepted() {
        let g = graph(&[("1", &["2"]), ("2", &["1"])]);
        let mut rng = StdRng::seed_from_u64(0);
        let ranks = sample_pagerank(&g, 0.85, 1, &mut rng).unwrap();
        let total: f64 = ranks.values().sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!(ranks.values().any(|&r| r == 1.0));
    }

    #[test]
    fn test_zero_samples_rejected() {
        let g = graph(&[("1", &[])]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            sample_pagerank(&g, 0.85, 0, &mut rng),
            Err(crate::Error::InvalidSampleCount { samples: 0 })
        ));
    }

    #[test]
    fn test_estimators_reject_bad_inputs() {
        let g = graph(&[("1", &[])]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            sample_pagerank(&g, 1.5, 10, &mut rng),
            Err(crate::Error::InvalidDamping { .. })
        ));
        assert!(matches!(
            iterate_pagerank(&g, -0.2),
            Err(crate::Error::InvalidDamping { .. })
        ));
        assert!(matches!(
            iterate_pagerank(&graph(&[]), 0.85),
            Err(crate::Error::EmptyGraph)
        ));
    }

    #[test]
    fn test_dangling_mass_is_redistributed() {
        // "3" has no out-links; its mass spreads uniformly, so every rank
        // stays strictly positive and the total is preserved.
        let g = graph(&[("1", &["3"]), ("2", &["3"]), ("3", &[])]);
        let ranks = iterate_pagerank(&g, 0.85).unwrap();
        assert!(ranks.values().all(|&r| r > 0.0));
        assert!(ranks["3"] > ranks["1"]);
        let total: f64 = ranks.values().sum();
        assert!((total - 1.0).abs() < 1e-6);
    }
}
