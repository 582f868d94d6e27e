//! Directed link graph over corpus pages

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// A directed graph of pages to the pages they link to.
///
/// Construction restricts every link target to pages present in the graph
/// and drops self-links, so every target is itself a key. Ordered maps keep
/// iteration deterministic, which makes sampling traces and printed output
/// reproducible without sorting at every use site.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkGraph {
    links: BTreeMap<String, BTreeSet<String>>,
}

impl LinkGraph {
    /// Build a graph from raw extracted links.
    ///
    /// Self-references and targets that are not keys of `raw` (external or
    /// broken links) are dropped.
    pub fn from_links(raw: HashMap<String, HashSet<String>>) -> Self {
        let pages: BTreeSet<String> = raw.keys().cloned().collect();
        let links = raw
            .into_iter()
            .map(|(page, targets)| {
                let kept: BTreeSet<String> = targets
                    .into_iter()
                    .filter(|target| *target != page && pages.contains(target))
                    .collect();
                (page, kept)
            })
            .collect();
        LinkGraph { links }
    }

    /// Number of pages in the graph
    pub fn page_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// Iterate page identifiers in sorted order
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.links.keys().map(String::as_str)
    }

    /// Outgoing links of a page, if the page exists
    pub fn links(&self, page: &str) -> Option<&BTreeSet<String>> {
        self.links.get(page)
    }

    /// Out-degree of a page, if the page exists
    pub fn out_degree(&self, page: &str) -> Option<usize> {
        self.links.get(page).map(BTreeSet::len)
    }

    /// Iterate (page, targets) pairs in sorted page order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.links.iter().map(|(page, targets)| (page.as_str(), targets))
    }
}
