use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six axis-aligned unit offsets, in enumeration order.
pub const FACE_DIRECTIONS: [Cell; 6] = [
    Cell::new(1, 0, 0),
    Cell::new(-1, 0, 0),
    Cell::new(0, 1, 0),
    Cell::new(0, -1, 0),
    Cell::new(0, 0, 1),
    Cell::new(0, 0, -1),
];

/// A unit-grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cell {
    /// The seed cell every cluster grows from.
    pub const ORIGIN: Cell = Cell::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Component-wise sum.
    pub const fn offset(self, by: Cell) -> Cell {
        Cell::new(self.x + by.x, self.y + by.y, self.z + by.z)
    }

    /// The six face neighbours, in [`FACE_DIRECTIONS`] order.
    pub fn face_neighbours(self) -> [Cell; 6] {
        FACE_DIRECTIONS.map(|dir| self.offset(dir))
    }

    pub fn manhattan_distance(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)
    }

    /// True when the two cells differ by exactly one unit along exactly one axis.
    pub fn is_face_adjacent(self, other: Cell) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// World-space centre of the unit cube occupying this cell.
    pub fn to_vec3(self) -> Vec3 {
        IVec3::from(self).as_vec3()
    }
}

impl From<IVec3> for Cell {
    fn from(v: IVec3) -> Self {
        Cell::new(v.x, v.y, v.z)
    }
}

impl From<Cell> for IVec3 {
    fn from(c: Cell) -> Self {
        IVec3::new(c.x, c.y, c.z)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
