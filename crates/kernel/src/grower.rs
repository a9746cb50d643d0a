use crate::cluster::{Cluster, GrowthStats};
use crate::source::IndexSource;
use cubefield_common::Cell;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Errors from growing a cluster.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrowError {
    #[error("target count must be at least 1, got {requested}")]
    InvalidTargetCount { requested: usize },
    #[error("growth stalled after {stalls} consecutive draws with {placed}/{target} cells placed")]
    Stalled {
        placed: usize,
        target: usize,
        stalls: u32,
    },
}

/// Growth configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowConfig {
    /// Consecutive empty-candidate draws tolerated before giving up.
    /// `None` retries forever.
    pub max_consecutive_stalls: Option<u32>,
}

impl Default for GrowConfig {
    fn default() -> Self {
        Self {
            max_consecutive_stalls: Some(1024),
        }
    }
}

impl GrowConfig {
    /// Retry stalled draws without limit.
    pub fn unbounded() -> Self {
        Self {
            max_consecutive_stalls: None,
        }
    }
}

/// Grows random face-connected clusters from the origin.
///
/// Each step draws a uniformly random occupied cell as the base, collects
/// its unoccupied face neighbours, and places one of them uniformly at
/// random. A base with no free neighbour is a stall: it is logged and a new
/// base is drawn.
#[derive(Debug, Clone, Default)]
pub struct ClusterGrower {
    config: GrowConfig,
}

impl ClusterGrower {
    pub fn new(config: GrowConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GrowConfig {
        &self.config
    }

    /// Reject target counts that cannot describe a cluster.
    pub fn check_target(target_count: usize) -> Result<(), GrowError> {
        if target_count == 0 {
            return Err(GrowError::InvalidTargetCount {
                requested: target_count,
            });
        }
        Ok(())
    }

    /// Grow a cluster of exactly `target_count` cells.
    pub fn grow<S>(&self, target_count: usize, rng: &mut S) -> Result<Cluster, GrowError>
    where
        S: IndexSource + ?Sized,
    {
        self.grow_with(target_count, rng, |_| {})
    }

    /// Grow a cluster, calling `on_place` for each cell the moment it is placed.
    ///
    /// The seed is reported first; the call order matches the returned
    /// cluster's order. Nothing is reported for an invalid target count.
    pub fn grow_with<S, F>(
        &self,
        target_count: usize,
        rng: &mut S,
        mut on_place: F,
    ) -> Result<Cluster, GrowError>
    where
        S: IndexSource + ?Sized,
        F: FnMut(Cell),
    {
        Self::check_target(target_count)?;
        let _span = tracing::debug_span!("grow_cluster", target = target_count).entered();

        let mut occupied: IndexSet<Cell> = IndexSet::with_capacity(target_count);
        let mut stats = GrowthStats::default();
        let mut stalls = StallCounter::default();

        occupied.insert(Cell::ORIGIN);
        on_place(Cell::ORIGIN);

        while occupied.len() < target_count {
            let base = occupied[rng.pick(occupied.len())];
            stats.samples += 1;

            let candidates: Vec<Cell> = base
                .face_neighbours()
                .into_iter()
                .filter(|c| !occupied.contains(c))
                .filter(|c| c.face_neighbours().iter().any(|n| occupied.contains(n)))
                .collect();

            if candidates.is_empty() {
                stats.stalls += 1;
                let consecutive = stalls.record();
                tracing::warn!(%base, "no free neighbour around base cell, drawing another");
                if let Some(max) = self.config.max_consecutive_stalls {
                    if consecutive > max {
                        return Err(GrowError::Stalled {
                            placed: occupied.len(),
                            target: target_count,
                            stalls: consecutive,
                        });
                    }
                }
                continue;
            }

            stalls.reset();
            let cell = candidates[rng.pick(candidates.len())];
            occupied.insert(cell);
            tracing::trace!(%cell, %base, placed = occupied.len(), "placed cell");
            on_place(cell);
        }

        tracing::debug!(
            cells = occupied.len(),
            samples = stats.samples,
            stalls = stats.stalls,
            "cluster grown"
        );
        Ok(Cluster::from_parts(occupied, stats))
    }
}

/// Consecutive empty-candidate draws since the last placement.
#[derive(Debug, Default)]
struct StallCounter {
    consecutive: u32,
}

impl StallCounter {
    /// Count one stall and return the running total. Saturates at `u32::MAX`.
    fn record(&mut self) -> u32 {
        self.consecutive = self.consecutive.saturating_add(1);
        self.consecutive
    }

    fn reset(&mut self) {
        self.consecutive = 0;
    }
}
