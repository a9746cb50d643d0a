//! Rendering Adapter: renderer-agnostic cube placement and debug output.
//!
//! # Invariants
//! - Renderers never mutate a cluster; they only observe placements.
//! - A regenerated scene clears every previous cube before placing new ones.
//! - Cubes reach the sink in placement order, one call per placement.
//!
//! # Workaround
//! Provides a trait-based sink with a debug text renderer as a workaround for
//! a 3D engine backend. The trait is stable; swap in a GPU implementation
//! without changing consumers.

mod renderer;
mod scene;

pub use renderer::{CubeSink, DebugTextRenderer, LayerRenderer, Renderer};
pub use scene::{CubeScene, DEFAULT_CUBE_COUNT};

pub fn crate_info() -> &'static str {
    "cubefield-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
