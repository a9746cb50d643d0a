use crate::renderer::CubeSink;
use cubefield_kernel::{Cluster, ClusterGrower, GrowConfig, GrowError, IndexSource};

/// Cube count used for the first scene.
pub const DEFAULT_CUBE_COUNT: usize = 10;

/// A sink plus the cluster currently shown in it.
///
/// Each regeneration replaces the previous cluster wholesale: the sink is
/// cleared, then every new cube is placed as soon as it is grown.
pub struct CubeScene<S: CubeSink> {
    sink: S,
    grower: ClusterGrower,
    current: Option<Cluster>,
    generation: u64,
}

impl<S: CubeSink> CubeScene<S> {
    pub fn new(sink: S, config: GrowConfig) -> Self {
        Self {
            sink,
            grower: ClusterGrower::new(config),
            current: None,
            generation: 0,
        }
    }

    /// Replace the scene with a freshly grown cluster of `target_count` cubes.
    ///
    /// An invalid count leaves the existing scene untouched. A growth failure
    /// leaves the scene empty.
    pub fn regenerate<R>(&mut self, target_count: usize, rng: &mut R) -> Result<&Cluster, GrowError>
    where
        R: IndexSource + ?Sized,
    {
        ClusterGrower::check_target(target_count)?;

        self.current = None;
        self.sink.clear();

        let sink = &mut self.sink;
        match self
            .grower
            .grow_with(target_count, rng, |cell| sink.place_cube(cell))
        {
            Ok(cluster) => {
                self.generation += 1;
                tracing::info!(
                    generation = self.generation,
                    cubes = cluster.len(),
                    stalls = cluster.stats().stalls,
                    "scene regenerated"
                );
                Ok(self.current.insert(cluster))
            }
            Err(e) => {
                self.sink.clear();
                tracing::warn!(error = %e, "scene regeneration failed");
                Err(e)
            }
        }
    }

    /// The cluster currently shown, if any.
    pub fn cluster(&self) -> Option<&Cluster> {
        self.current.as_ref()
    }

    /// Number of successful regenerations.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
