//! Corpus ingestion: extract anchor targets from a directory of HTML pages

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};

use regex::Regex;

/// Fixed anchor-href extraction pattern. Robust HTML parsing is out of
/// scope; pages that deviate from this shape simply contribute no links.
const HREF_PATTERN: &str = r#"<a\s+(?:[^>]*?)href="([^"]*)""#;

/// Parse a directory of HTML pages and collect the links each page makes.
///
/// Only `*.html` files are read; each page maps to the set of href targets
/// found in it, minus references to itself. Targets pointing outside the
/// corpus are kept here and dropped later by
/// [`LinkGraph::from_links`](crate::pagerank::LinkGraph::from_links).
///
/// # Errors
///
/// Returns error if the directory or any HTML file cannot be read.
pub fn crawl(directory: &Path) -> Result<HashMap<String, HashSet<String>>, crate::Error> {
    let href = Regex::new(HREF_PATTERN).expect("href pattern should compile");
    let mut pages = HashMap::new();

    let entries = fs::read_dir(directory).map_err(|source| crate::Error::Io {
        operation: format!("read corpus directory '{}'", directory.display()),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| crate::Error::Io {
            operation: format!("list corpus directory '{}'", directory.display()),
            source,
        })?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("html") {
            continue;
        }

        let filename = entry.file_name().to_string_lossy().into_owned();
        let contents = fs::read_to_string(&path).map_err(|source| crate::Error::Io {
            operation: format!("read corpus page '{}'", path.display()),
            source,
        })?;

        let links: HashSet<String> = href
            .captures_iter(&contents)
            .map(|capture| capture[1].to_string())
            .filter(|link| *link != filename)
            .collect();
        pages.insert(filename, links);
    }

    Ok(pages)
}
