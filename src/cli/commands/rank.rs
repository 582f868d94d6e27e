//! Rank command - Estimate PageRank over an HTML corpus

use std::{collections::BTreeMap, fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, random, rngs::StdRng};
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    corpus,
    pagerank::{LinkGraph, PageRankConfig, iterate_pagerank, sample_pagerank},
};

#[derive(Parser, Debug)]
#[command(about = "Estimate page ranks for an HTML corpus")]
pub struct RankArgs {
    /// Directory of HTML pages to rank
    pub corpus: PathBuf,

    /// Damping factor of the random-surfer model
    #[arg(long, default_value_t = PageRankConfig::default().damping)]
    pub damping: f64,

    /// Number of samples drawn by the sampling estimator
    #[arg(long, short = 'n', default_value_t = PageRankConfig::default().samples)]
    pub samples: usize,

    /// Random seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write both rank vectors to a JSON file
    #[arg(long, short = 'e')]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RankReport {
    damping: f64,
    samples: usize,
    sampled: BTreeMap<String, f64>,
    iterated: BTreeMap<String, f64>,
}

pub fn execute(args: RankArgs) -> Result<()> {
    let config = PageRankConfig::new(args.damping, args.samples);

    let raw_links = corpus::crawl(&args.corpus)
        .with_context(|| format!("failed to crawl corpus '{}'", args.corpus.display()))?;
    let graph = LinkGraph::from_links(raw_links);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(random()),
    };

    let sampled = sample_pagerank(&graph, config.damping, config.samples, &mut rng)
        .context("sampling estimator failed")?;
    println!("PageRank Results from Sampling (n = {})", config.samples);
    print_ranks(&sampled);

    let iterated =
        iterate_pagerank(&graph, config.damping).context("iterative estimator failed")?;
    println!("PageRank Results from Iteration");
    print_ranks(&iterated);

    if let Some(path) = args.export {
        let report = RankReport {
            damping: config.damping,
            samples: config.samples,
            sampled,
            iterated,
        };
        let file = File::create(&path)
            .with_context(|| format!("failed to create '{}'", path.display()))?;
        to_writer_pretty(file, &report)?;
        println!("\nRank report exported to: {}", path.display());
    }

    Ok(())
}

fn print_ranks(ranks: &BTreeMap<String, f64>) {
    for (page, rank) in ranks {
        println!("  {page}: {rank:.4}");
    }
}
