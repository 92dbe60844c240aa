//! Conversion between continuous world positions and grid cells.

use crate::error::GridError;
use trestle_core::Cell;

/// Maps world positions to cells and back.
///
/// A uniform grid: every cell is a `cell_size` cube and cell `(0, 0, 0)`
/// is centered on `origin`. Pure data, validated once at construction
/// and read-only afterwards.
///
/// # Examples
///
/// ```
/// use trestle_core::Cell;
/// use trestle_grid::GridTransform;
///
/// let transform = GridTransform::new(2.0, [0.0, 0.0, 0.0]).unwrap();
/// assert_eq!(transform.world_to_cell([4.9, 0.0, -2.1]), Cell::new(2, 0, -1));
/// assert_eq!(transform.cell_to_world(Cell::new(2, 0, -1)), [4.0, 0.0, -2.0]);
/// assert_eq!(transform.snap([4.9, 0.0, -2.1]), [4.0, 0.0, -2.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridTransform {
    cell_size: f64,
    origin: [f64; 3],
}

impl GridTransform {
    /// Create a transform with the given cell size and world origin.
    ///
    /// Returns [`GridError::InvalidCellSize`] unless `cell_size` is
    /// finite and strictly positive.
    pub fn new(cell_size: f64, origin: [f64; 3]) -> Result<Self, GridError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(GridError::InvalidCellSize { value: cell_size });
        }
        Ok(Self { cell_size, origin })
    }

    /// Edge length of one cell in world units.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// World position of cell `(0, 0, 0)`.
    pub fn origin(&self) -> [f64; 3] {
        self.origin
    }

    /// The cell whose center is nearest to `world`.
    pub fn world_to_cell(&self, world: [f64; 3]) -> Cell {
        let scale = |w: f64, o: f64| ((w - o) / self.cell_size).round() as i32;
        Cell::new(
            scale(world[0], self.origin[0]),
            scale(world[1], self.origin[1]),
            scale(world[2], self.origin[2]),
        )
    }

    /// World position of the center of `cell`.
    pub fn cell_to_world(&self, cell: Cell) -> [f64; 3] {
        [
            cell.x as f64 * self.cell_size + self.origin[0],
            cell.y as f64 * self.cell_size + self.origin[1],
            cell.z as f64 * self.cell_size + self.origin[2],
        ]
    }

    /// Snap a world position to the nearest cell center.
    pub fn snap(&self, world: [f64; 3]) -> [f64; 3] {
        self.cell_to_world(self.world_to_cell(world))
    }
}
