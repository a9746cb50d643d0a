//! Cluster kernel: random connected-cluster growth on the integer grid.
//!
//! # Invariants
//! - Every cluster starts at the origin.
//! - Each placed cell is face-adjacent to a previously placed cell.
//! - No cell is placed twice.
//! - Growth is deterministic for a given seeded index source.

pub mod cluster;
pub mod grower;
pub mod source;

pub use cluster::{Cluster, ClusterError, GrowthStats, validate_sequence};
pub use grower::{ClusterGrower, GrowConfig, GrowError};
pub use source::{FixedIndex, IndexSource, ScriptedIndices};

pub fn crate_info() -> &'static str {
    "cubefield-kernel v0.1.0"
}
