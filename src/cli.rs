//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "geocrawl", about = "geo-partitioned corpus generation tool.")]
/// Holds every command that is callable by the `geocrawl` command.
pub enum Geocrawl {
    #[structopt(about = "Downloading of CommonCrawl")]
    Download(Download),
    #[structopt(about = "Extract, filter and deduplicate lines from segments")]
    Pipeline(Pipeline),
    #[structopt(about = "Move lines of unidentified shards into language partitions")]
    Langid(Langid),
    #[structopt(about = "Merge and deduplicate the shards of each partition")]
    Consolidate(Consolidate),
}

#[derive(Debug, StructOpt)]
/// Download command and parameters.
/// ```sh
/// geocrawl download [OPTIONS] <crawl> <dst>
/// ```
pub struct Download {
    #[structopt(help = "crawl identifier (CC-MAIN-2022-40)")]
    pub crawl: String,
    #[structopt(parse(from_os_str), help = "download destination")]
    pub dst: PathBuf,
    #[structopt(
        long = "paths-file",
        parse(from_os_str),
        help = "local wet.paths(.gz) file, instead of downloading the crawl's one"
    )]
    pub paths_file: Option<PathBuf>,
    #[structopt(short = "t", default_value = "4", help = "number of concurrent downloads.")]
    pub n_tasks: usize,
    #[structopt(short = "o", default_value = "0", help = "number of segments to skip.")]
    pub offset: usize,
    #[structopt(short = "l", long = "limit", help = "number of segments to download.")]
    pub limit: Option<usize>,
    #[structopt(
        long = "errors",
        parse(from_os_str),
        default_value = "errors.txt",
        help = "file listing failed downloads"
    )]
    pub errors: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Pipeline command and parameters.
///
/// Segments are read from `--src` if provided, streamed from CommonCrawl otherwise.
pub struct Pipeline {
    #[structopt(parse(from_os_str), help = "segment index (wet.paths, possibly gzipped)")]
    pub segments: PathBuf,
    #[structopt(parse(from_os_str), help = "corpus destination")]
    pub dst: PathBuf,
    #[structopt(
        long = "src",
        parse(from_os_str),
        help = "root of materialized segments"
    )]
    pub src: Option<PathBuf>,
    #[structopt(short = "w", long = "workers", help = "number of workers. Defaults to the number of cpus.")]
    pub workers: Option<usize>,
    #[structopt(long = "batch-size", default_value = "16", help = "segments per batch")]
    pub batch_size: usize,
    #[structopt(long = "shard-cap", default_value = "100000", help = "maximum rows per shard")]
    pub shard_cap: usize,
    #[structopt(long = "period", help = "period token of output shards")]
    pub period: Option<String>,
    #[structopt(short = "o", default_value = "0", help = "number of segments to skip.")]
    pub offset: usize,
    #[structopt(short = "l", long = "limit", help = "number of segments to process.")]
    pub limit: Option<usize>,
    #[structopt(
        long = "exclude-domains",
        parse(from_os_str),
        help = "file listing domains to skip"
    )]
    pub exclude_domains: Option<PathBuf>,
    #[structopt(
        long = "exclude-suffixes",
        parse(from_os_str),
        help = "file listing country suffixes to skip"
    )]
    pub exclude_suffixes: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Language partitioning command and parameters.
pub struct Langid {
    #[structopt(parse(from_os_str), help = "corpus location")]
    pub root: PathBuf,
    #[structopt(
        long = "lid-path",
        parse(from_os_str),
        help = "fasttext language identification model. Without it, nothing is moved."
    )]
    pub lid_path: Option<PathBuf>,
    #[structopt(long = "threshold", default_value = "0.8", help = "prediction threshold")]
    pub threshold: f32,
    #[structopt(long = "shard-cap", default_value = "100000", help = "maximum rows per shard")]
    pub shard_cap: usize,
    #[structopt(short = "w", long = "workers", help = "number of workers. Defaults to the number of cpus.")]
    pub workers: Option<usize>,
}

#[derive(Debug, StructOpt)]
/// Consolidation command and parameters.
pub struct Consolidate {
    #[structopt(parse(from_os_str), help = "corpus location")]
    pub src: PathBuf,
    #[structopt(
        long = "dst",
        parse(from_os_str),
        help = "final corpus destination. Consolidates in place if absent."
    )]
    pub dst: Option<PathBuf>,
    #[structopt(long = "shard-cap", default_value = "100000", help = "maximum rows per shard")]
    pub shard_cap: usize,
    #[structopt(long = "period", help = "period token of output shards")]
    pub period: Option<String>,
    #[structopt(short = "w", long = "workers", help = "number of workers. Defaults to the number of cpus.")]
    pub workers: Option<usize>,
}
