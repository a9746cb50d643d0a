use cubefield_common::Cell;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Errors from checking a cell sequence against the cluster invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClusterError {
    #[error("cluster is empty")]
    Empty,
    #[error("cluster must start at the origin, found {0}")]
    SeedNotAtOrigin(Cell),
    #[error("cell {cell} at index {index} was already placed")]
    Duplicate { index: usize, cell: Cell },
    #[error("cell {cell} at index {index} is not face-adjacent to any earlier cell")]
    Detached { index: usize, cell: Cell },
}

/// Counters collected while growing a cluster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthStats {
    /// Base cells drawn from the occupied set.
    pub samples: u64,
    /// Draws whose base had no unoccupied neighbour.
    pub stalls: u64,
}

/// A grown cluster: the occupied set in placement order.
///
/// Membership and ordering share one `IndexSet`, so random access by
/// placement index and `contains` are both O(1).
/// Deserializing checks the cluster invariants; an invalid sequence is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCluster")]
pub struct Cluster {
    cells: IndexSet<Cell>,
    stats: GrowthStats,
}

/// Unchecked wire form of [`Cluster`].
#[derive(Deserialize)]
struct RawCluster {
    cells: Vec<Cell>,
    #[serde(default)]
    stats: GrowthStats,
}

impl TryFrom<RawCluster> for Cluster {
    type Error = ClusterError;

    fn try_from(raw: RawCluster) -> Result<Self, Self::Error> {
        validate_sequence(&raw.cells)?;
        Ok(Self::from_parts(raw.cells.into_iter().collect(), raw.stats))
    }
}

impl Cluster {
    pub(crate) fn from_parts(cells: IndexSet<Cell>, stats: GrowthStats) -> Self {
        Self { cells, stats }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in placement order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Cell placed at `index`.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get_index(index).copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// The seed cell, if any.
    pub fn seed(&self) -> Option<Cell> {
        self.get(0)
    }

    /// Most recently placed cell.
    pub fn last(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    pub fn to_vec(&self) -> Vec<Cell> {
        self.cells.iter().copied().collect()
    }

    pub fn stats(&self) -> GrowthStats {
        self.stats
    }

    /// Inclusive bounding box `(min, max)`, or `None` for an empty cluster.
    pub fn bounds(&self) -> Option<(Cell, Cell)> {
        let mut iter = self.cells.iter().copied().map(glam::IVec3::from);
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some((min.into(), max.into()))
    }

    /// Check the cluster invariants.
    pub fn validate(&self) -> Result<(), ClusterError> {
        validate_sequence(&self.to_vec())
    }

    /// FNV-1a hash over the placement-ordered cells.
    ///
    /// Two runs with the same seed produce the same hash.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        let mut mix = |bytes: &[u8]| {
            for &b in bytes {
                h ^= b as u64;
                h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        for cell in &self.cells {
            mix(&cell.x.to_le_bytes());
            mix(&cell.y.to_le_bytes());
            mix(&cell.z.to_le_bytes());
        }
        h
    }
}

/// Check that `cells` starts at the origin, has no duplicates, and that every
/// cell after the first touches an earlier one by a face.
pub fn validate_sequence(cells: &[Cell]) -> Result<(), ClusterError> {
    let first = *cells.first().ok_or(ClusterError::Empty)?;
    if first != Cell::ORIGIN {
        return Err(ClusterError::SeedNotAtOrigin(first));
    }

    let mut seen = IndexSet::with_capacity(cells.len());
    seen.insert(first);
    for (index, &cell) in cells.iter().enumerate().skip(1) {
        if seen.contains(&cell) {
            return Err(ClusterError::Duplicate { index, cell });
        }
        if !cell.face_neighbours().iter().any(|n| seen.contains(n)) {
            return Err(ClusterError::Detached { index, cell });
        }
        seen.insert(cell);
    }
    Ok(())
}
