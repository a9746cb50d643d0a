use cubefield_common::Cell;
use cubefield_kernel::Cluster;
use glam::Vec3;

/// Receives cubes as a cluster is grown.
///
/// Implemented by whatever draws the cubes. `place_cube` is called once per
/// placement, in order; `clear` drops every cube created so far.
pub trait CubeSink {
    fn place_cube(&mut self, cell: Cell);
    fn clear(&mut self);
}

impl<S: CubeSink + ?Sized> CubeSink for &mut S {
    fn place_cube(&mut self, cell: Cell) {
        (**self).place_cube(cell);
    }

    fn clear(&mut self) {
        (**self).clear();
    }
}

/// Renderer-agnostic interface for whole-cluster output.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render the given cluster.
    fn render(&self, cluster: &Cluster) -> Self::Output;
}

/// Debug sink: workaround for a 3D engine.
///
/// Records the world-space centre of every unit cube it is asked to create.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    positions: Vec<Vec3>,
    clears: usize,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cubes currently in the scene.
    pub fn cube_count(&self) -> usize {
        self.positions.len()
    }

    /// Cube centres in creation order.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// How many times the scene has been cleared.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Human-readable listing of the current cubes.
    pub fn describe(&self) -> String {
        let mut out = format!("=== Cubes: {} ===\n", self.positions.len());
        for (i, p) in self.positions.iter().enumerate() {
            out.push_str(&format!("  [{i:>4}] pos=({:.1}, {:.1}, {:.1})\n", p.x, p.y, p.z));
        }
        out
    }
}

impl CubeSink for DebugTextRenderer {
    fn place_cube(&mut self, cell: Cell) {
        self.positions.push(cell.to_vec3());
    }

    fn clear(&mut self) {
        self.positions.clear();
        self.clears += 1;
    }
}

/// Draws a cluster as horizontal slices, highest `y` first.
///
/// Rows run along `z`, columns along `x`. `@` marks the origin, `#` any
/// other occupied cell, `.` an empty cell inside the bounding box.
#[derive(Debug, Default, Clone, Copy)]
pub struct LayerRenderer;

impl LayerRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for LayerRenderer {
    type Output = String;

    fn render(&self, cluster: &Cluster) -> String {
        let Some((min, max)) = cluster.bounds() else {
            return String::from("(empty)\n");
        };

        let mut out = String::new();
        for y in (min.y..=max.y).rev() {
            out.push_str(&format!("y={y}\n"));
            for z in min.z..=max.z {
                for x in min.x..=max.x {
                    let cell = Cell::new(x, y, z);
                    let ch = if cell == Cell::ORIGIN && cluster.contains(cell) {
                        '@'
                    } else if cluster.contains(cell) {
                        '#'
                    } else {
                        '.'
                    };
                    out.push(ch);
                }
                out.push('\n');
            }
        }
        out
    }
}
