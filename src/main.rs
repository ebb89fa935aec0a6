//! # geocrawl
//!
//! Geo-partitioned line corpus generation from a Common Crawl dump.
//!
//! ```sh
//! USAGE:
//!     geocrawl <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     consolidate    Merge and deduplicate the shards of each partition
//!     download       Downloading of CommonCrawl
//!     help           Prints this message or the help of the given subcommand(s)
//!     langid         Move lines of unidentified shards into language partitions
//!     pipeline       Extract, filter and deduplicate lines from segments
//! ```
//!
//! Logging is configured with `RUST_LOG` (`RUST_LOG=info geocrawl pipeline ...`).
use std::fs::File;
use std::io::Write;

use geocrawl::error::Error;
use geocrawl::identifiers::{Classify, FastTextClassifier};
use geocrawl::pipelines::{
    Exclusions, LangId, Pipeline, PipelineConfig, RunSummary, SegmentOrchestrator,
};
use geocrawl::processing::Consolidate;
use geocrawl::sources::download::Downloader;
use geocrawl::sources::{HttpSource, LocalSource, SegmentIndex, SegmentSource};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn report(summary: &RunSummary) {
    info!("run summary: {}", summary);
    print!("{}", summary);
}

fn download(d: cli::Download) -> Result<(), Error> {
    let dl = Downloader::commoncrawl()?;
    let index = match &d.paths_file {
        Some(path) => SegmentIndex::from_path(path)?,
        None => dl.fetch_index(&d.crawl, &d.dst)?,
    };
    let segments = index.slice(d.offset, d.limit).into_segments();
    info!("{} segments to download", segments.len());

    let results = dl.download_all(&segments, &d.dst, d.n_tasks)?;

    let mut error_file = File::create(&d.errors)?;
    let mut nb_errors = 0;
    for (segment, result) in &results {
        if let Err(e) = result {
            error!("Error during download of {}: {}", segment, e);
            writeln!(error_file, "{}\t{}", segment, e)?;
            nb_errors += 1;
        }
    }
    info!(
        "{} segments downloaded, {} errors (see {:?})",
        results.len() - nb_errors,
        nb_errors,
        d.errors
    );
    Ok(())
}

fn run_segments<S: SegmentSource>(
    segments: Vec<String>,
    source: S,
    config: PipelineConfig,
) -> Result<RunSummary, Error> {
    SegmentOrchestrator::new(segments, source, config).run()
}

fn pipeline(p: cli::Pipeline) -> Result<(), Error> {
    let segments = SegmentIndex::from_path(&p.segments)?
        .slice(p.offset, p.limit)
        .into_segments();

    let mut config = PipelineConfig::new(&p.dst);
    if let Some(workers) = p.workers {
        config.workers = workers;
    }
    config.batch_size = p.batch_size;
    config.shard_cap = p.shard_cap;
    config.period = p.period;
    config.exclusions = Exclusions::from_paths(
        p.exclude_domains.as_deref(),
        p.exclude_suffixes.as_deref(),
    )?;

    let summary = match &p.src {
        Some(src) => run_segments(segments, LocalSource::new(src), config)?,
        None => run_segments(segments, HttpSource::commoncrawl()?, config)?,
    };
    report(&summary);
    Ok(())
}

fn langid(l: cli::Langid) -> Result<(), Error> {
    let classifier: Option<Box<dyn Classify>> = match &l.lid_path {
        Some(path) => Some(Box::new(FastTextClassifier::new(path, l.threshold)?) as Box<dyn Classify>),
        None => {
            warn!("No language identification model specified!");
            None
        }
    };

    let mut pass = LangId::new(&l.root, classifier, l.shard_cap);
    if let Some(workers) = l.workers {
        pass = pass.with_workers(workers);
    }
    report(&pass.run()?);
    Ok(())
}

fn consolidate(c: cli::Consolidate) -> Result<(), Error> {
    let consolidate = match &c.dst {
        Some(dst) => Consolidate::into_dst(&c.src, dst, c.shard_cap),
        None => Consolidate::in_place(&c.src, c.shard_cap),
    }
    .with_period(c.period);

    let workers = c.workers.unwrap_or_else(rayon::current_num_threads);
    let summary = RunSummary::from(consolidate.run(workers)?);
    report(&summary);
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Geocrawl::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Geocrawl::Download(d) => download(d),
        cli::Geocrawl::Pipeline(p) => pipeline(p),
        cli::Geocrawl::Langid(l) => langid(l),
        cli::Geocrawl::Consolidate(c) => consolidate(c),
    }
}
