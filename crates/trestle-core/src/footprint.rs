//! Inclusive min/max cell-offset footprints for multi-cell objects.

use crate::cell::{Axis, Cell};
use std::error::Error;
use std::fmt;

/// The volume an object occupies, as inclusive min and max cell offsets
/// from its anchor cell.
///
/// A footprint is measured in offsets, not absolute cells: the anchor is
/// supplied at query time. Size per axis is `max - min + 1`, so the
/// smallest footprint ([`Footprint::UNIT`]) covers exactly the anchor.
///
/// Footprints can only be constructed valid: [`Footprint::new`] rejects
/// bounds that are inverted on any axis.
///
/// # Examples
///
/// ```
/// use trestle_core::{Axis, Cell, Footprint};
///
/// // A 3x1x2 slab reaching one cell behind its anchor on X.
/// let fp = Footprint::new(Cell::new(-1, 0, 0), Cell::new(1, 0, 1)).unwrap();
/// assert_eq!(fp.extent_along(Axis::X), 3);
/// assert_eq!(fp.extent_along(Axis::Y), 1);
/// assert_eq!(fp.cell_count(), 6);
/// assert!(fp.absolute_cells(Cell::new(5, 0, 5)).any(|c| c == Cell::new(4, 0, 6)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Footprint {
    min: Cell,
    max: Cell,
}

impl Footprint {
    /// The 1x1x1 footprint covering only the anchor cell.
    pub const UNIT: Footprint = Footprint {
        min: Cell::ZERO,
        max: Cell::ZERO,
    };

    /// Construct a footprint from inclusive min/max offsets.
    ///
    /// Returns [`FootprintError::InvertedBounds`] if `min` exceeds `max`
    /// on any axis.
    pub fn new(min: Cell, max: Cell) -> Result<Self, FootprintError> {
        if min.x > max.x || min.y > max.y || min.z > max.z {
            return Err(FootprintError::InvertedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Construct a footprint anchored at its minimum corner with the given
    /// per-axis sizes.
    ///
    /// Returns [`FootprintError::ZeroSize`] if any size is zero.
    pub fn from_size(x: u32, y: u32, z: u32) -> Result<Self, FootprintError> {
        if x == 0 || y == 0 || z == 0 {
            return Err(FootprintError::ZeroSize { x, y, z });
        }
        Ok(Self {
            min: Cell::ZERO,
            max: Cell::new(x as i32 - 1, y as i32 - 1, z as i32 - 1),
        })
    }

    /// Minimum offset (inclusive).
    pub const fn min(self) -> Cell {
        self.min
    }

    /// Maximum offset (inclusive).
    pub const fn max(self) -> Cell {
        self.max
    }

    /// Size per axis: `max - min + 1`.
    pub fn size(self) -> Cell {
        self.max - self.min + Cell::new(1, 1, 1)
    }

    /// Extent along one axis, in grid units. Always at least 1.
    pub const fn extent_along(self, axis: Axis) -> i32 {
        self.max.axis(axis) - self.min.axis(axis) + 1
    }

    /// Total number of cells covered.
    pub fn cell_count(self) -> usize {
        let s = self.size();
        s.x as usize * s.y as usize * s.z as usize
    }

    /// Iterate the covered offsets in `x`-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let (min, max) = (self.min, self.max);
        (min.x..=max.x).flat_map(move |x| {
            (min.y..=max.y)
                .flat_map(move |y| (min.z..=max.z).map(move |z| Cell::new(x, y, z)))
        })
    }

    /// Iterate the covered absolute cells for an object anchored at `anchor`.
    pub fn absolute_cells(self, anchor: Cell) -> impl Iterator<Item = Cell> {
        self.cells().map(move |offset| anchor + offset)
    }

    /// `true` if the absolute cell lies inside the footprint anchored at
    /// `anchor`.
    pub fn contains(self, anchor: Cell, cell: Cell) -> bool {
        let rel = cell - anchor;
        rel.x >= self.min.x
            && rel.x <= self.max.x
            && rel.y >= self.min.y
            && rel.y <= self.max.y
            && rel.z >= self.min.z
            && rel.z <= self.max.z
    }
}

/// Errors from footprint construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FootprintError {
    /// `min` exceeds `max` on at least one axis.
    InvertedBounds {
        /// The offending minimum offset.
        min: Cell,
        /// The offending maximum offset.
        max: Cell,
    },
    /// A per-axis size of zero was requested.
    ZeroSize {
        /// Requested X size.
        x: u32,
        /// Requested Y size.
        y: u32,
        /// Requested Z size.
        z: u32,
    },
}

impl fmt::Display for FootprintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedBounds { min, max } => {
                write!(f, "footprint min {min} exceeds max {max} on some axis")
            }
            Self::ZeroSize { x, y, z } => {
                write!(f, "footprint size ({x}, {y}, {z}) has a zero axis")
            }
        }
    }
}

impl Error for FootprintError {}
