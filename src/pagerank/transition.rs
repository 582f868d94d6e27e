//! Single-step transition model of the random surfer

use std::collections::BTreeMap;

use super::graph::LinkGraph;

pub(crate) fn validate_damping(damping: f64) -> Result<(), crate::Error> {
    if !(0.0..=1.0).contains(&damping) {
        return Err(crate::Error::InvalidDamping { value: damping });
    }
    Ok(())
}

/// Probability distribution over which page the surfer visits next.
///
/// With probability `damping` the surfer follows one of `page`'s outgoing
/// links uniformly; with probability `1 - damping` it jumps to a uniformly
/// random page. A page with no outgoing links is treated as linking to
/// every page including itself, which collapses both terms to a uniform
/// distribution. The returned probabilities cover every page in the graph
/// and sum to 1.
///
/// # Errors
///
/// Returns error if the graph is empty, `damping` lies outside [0, 1], or
/// `page` is not part of the graph.
pub fn transition_probabilities(
    graph: &LinkGraph,
    page: &str,
    damping: f64,
) -> Result<BTreeMap<String, f64>, crate::Error> {
    validate_damping(damping)?;
    if graph.is_empty() {
        return Err(crate::Error::EmptyGraph);
    }
    let targets = graph.links(page).ok_or_else(|| crate::Error::UnknownPage {
        page: page.to_string(),
    })?;

    let total_pages = graph.page_count() as f64;
    let mut distribution: BTreeMap<String, f64> =
        graph.pages().map(|p| (p.to_string(), 0.0)).collect();

    if targets.is_empty() {
        // damping/M + (1 - damping)/M simplifies to 1/M
        for probability in distribution.values_mut() {
            *probability = 1.0 / total_pages;
        }
    } else {
        let follow_link = damping / targets.len() as f64;
        for target in targets {
            *distribution
                .get_mut(target)
                .expect("graph invariant: every link target is a page") += follow_link;
        }
        let random_jump = (1.0 - damping) / total_pages;
        for probability in distribution.values_mut() {
            *probability += random_jump;
        }
    }

    Ok(distribution)
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

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
    fn test_linked_pages_share_damping_mass() {
        // "1" links to "2" and "3" in a 3-page corpus
        let g = graph(&[("1", &["2", "3"]), ("2", &["3"]), ("3", &["2"])]);
        let dist = transition_probabilities(&g, "1", 0.85).unwrap();

        let jump = 0.15 / 3.0;
        assert!((dist["1"] - jump).abs() < 1e-12);
        assert!((dist["2"] - (0.425 + jump)).abs() < 1e-12);
        assert!((dist["3"] - (0.425 + jump)).abs() < 1e-12);
    }

    #[test]
    fn test_dangling_page_is_uniform() {
        let g = graph(&[("1", &[]), ("2", &["1"]), ("3", &["1", "2"])]);
        let dist = transition_probabilities(&g, "1", 0.85).unwrap();
        for page in ["1", "2", "3"] {
            assert!((dist[page] - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_distribution_sums_to_one() {
        let g = graph(&[("1", &["2"]), ("2", &["1", "3"]), ("3", &[])]);
        for page in ["1", "2", "3"] {
            let dist = transition_probabilities(&g, page, 0.85).unwrap();
            let total: f64 = dist.values().sum();
            assert!((total - 1.0).abs() < 1e-9, "sum for {page} was {total}");
        }
    }

    #[test]
    fn test_rejects_invalid_damping() {
        let g = graph(&[("1", &[])]);
        assert!(matches!(
            transition_probabilities(&g, "1", -0.1),
            Err(crate::Error::InvalidDamping { .. })
        ));
        assert!(matches!(
            transition_probabilities(&g, "1", 1.5),
            Err(crate::Error::InvalidDamping { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_graph() {
        let g = graph(&[]);
        assert!(matches!(
            transition_probabilities(&g, "1", 0.85),
            Err(crate::Error::EmptyGraph)
        ));
    }

    #[test]
    fn test_rejects_unknown_page() {
        let g = graph(&[("1", &[])]);
        assert!(matches!(
            transition_probabilities(&g, "nope", 0.85),
            Err(crate::Error::UnknownPage { .. })
        ));
    }
}
