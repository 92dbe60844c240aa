//! The placed-object record tracked by the spatial registry.

use crate::cell::Cell;
use crate::footprint::Footprint;
use crate::id::ObjectId;
use crate::kind::ObjectKind;

/// One entity occupying cells on the grid.
///
/// This is the registry's view of an object: identity, kind tag, anchor,
/// and footprint. The host application owns the actual instance (mesh,
/// materials, physics body); the core only reasons about occupancy.
///
/// Invariant: while registered, every cell of `anchor + [min, max]` maps
/// to this object's id in the registry, modulo the documented
/// first-claim-wins tolerance for overlapping registrations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedObject {
    /// Unique identity.
    pub id: ObjectId,
    /// Kind tag for typed queries.
    pub kind: ObjectKind,
    /// Reference cell the footprint is measured from.
    pub anchor: Cell,
    /// Occupied volume relative to the anchor.
    pub footprint: Footprint,
}

impl PlacedObject {
    /// Construct a record.
    pub fn new(id: ObjectId, kind: ObjectKind, anchor: Cell, footprint: Footprint) -> Self {
        Self {
            id,
            kind,
            anchor,
            footprint,
        }
    }

    /// Iterate the absolute cells this object covers.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        self.footprint.absolute_cells(self.anchor)
    }

    /// `true` if the object covers `cell`.
    pub fn occupies(&self, cell: Cell) -> bool {
        self.footprint.contains(self.anchor, cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::SegmentKind;

    #[test]
    fn cells_and_occupies_agree() {
        let object = PlacedObject::new(
            ObjectId::next(),
            ObjectKind::Segment(SegmentKind::Middle),
            Cell::new(4, 0, 4),
            Footprint::from_size(2, 1, 3).unwrap(),
        );
        assert_eq!(object.cells().count(), 6);
        for cell in object.cells() {
            assert!(object.occupies(cell));
        }
        assert!(!object.occupies(Cell::new(3, 0, 4)));
    }
}
