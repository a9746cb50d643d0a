//! Shared grid types for cubefield.
//!
//! # Invariants
//! - A `Cell` is an immutable integer coordinate; equality is component-wise.
//! - Face directions are always enumerated in the order +x, -x, +y, -y, +z, -z.

pub mod cell;

pub use cell::{Cell, FACE_DIRECTIONS};

pub fn crate_info() -> &'static str {
    "cubefield-common v0.1.0"
}
