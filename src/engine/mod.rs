//! Adversarial candidate partitioning
//!
//! Groups candidate secrets by the feedback a guess produces and picks the
//! least helpful group as the answer.

mod partition;
mod selection;

pub use partition::{Group, Partition, group_by_pattern};
pub use selection::{PartitionError, partition_candidates};
