/*!
# IO utilities

Shard files: naming, writing and reading.

Output is partitioned by [PartitionKey] into `{region}/{country}/{language}/` directories,
each holding capped, write-once, gzipped csv shards.
!*/
pub mod naming;
pub mod reader;
pub mod writer;

pub use naming::{PartitionKey, ShardName, UNKNOWN_LANGUAGE};
pub use reader::{read_shard, ShardReader};
pub use writer::{PartitionWriter, DEFAULT_SHARD_CAP};
