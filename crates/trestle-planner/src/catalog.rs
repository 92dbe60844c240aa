//! Per-kind segment metadata: the read-only lookup table the planner
//! consults.

use trestle_core::{Axis, Footprint, SegmentKind};

/// Placement metadata for one segment kind.
///
/// The prototype's footprint is all the planner needs; visual prototypes
/// (meshes, prefabs) stay host-side, keyed by the same [`SegmentKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentSpec {
    /// Occupied volume relative to the segment's anchor.
    pub footprint: Footprint,
}

impl SegmentSpec {
    /// Construct a spec from a footprint.
    pub const fn new(footprint: Footprint) -> Self {
        Self { footprint }
    }
}

/// The kind → metadata table, populated once at configuration time and
/// treated as read-only by the planner.
///
/// Footprints can only be constructed valid, so a catalog is valid by
/// construction.
///
/// # Examples
///
/// ```
/// use trestle_core::{Axis, Footprint, SegmentKind};
/// use trestle_planner::{SegmentCatalog, SegmentSpec};
///
/// // Unit pieces everywhere: a plank bridge.
/// let catalog = SegmentCatalog::uniform(Footprint::UNIT);
/// assert_eq!(catalog.spacing(SegmentKind::Middle, Axis::X), 1);
///
/// // A 5-cell-long middle girder.
/// let girder = SegmentSpec::new(Footprint::from_size(5, 1, 1).unwrap());
/// let catalog = SegmentCatalog::new(
///     SegmentSpec::new(Footprint::UNIT),
///     girder,
///     SegmentSpec::new(Footprint::UNIT),
///     SegmentSpec::new(Footprint::UNIT),
/// );
/// assert_eq!(catalog.spacing(SegmentKind::Middle, Axis::X), 5);
/// assert_eq!(catalog.spacing(SegmentKind::Middle, Axis::Z), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentCatalog {
    start: SegmentSpec,
    middle: SegmentSpec,
    filler: SegmentSpec,
    end: SegmentSpec,
}

impl SegmentCatalog {
    /// Build a catalog from per-kind specs.
    pub const fn new(
        start: SegmentSpec,
        middle: SegmentSpec,
        filler: SegmentSpec,
        end: SegmentSpec,
    ) -> Self {
        Self {
            start,
            middle,
            filler,
            end,
        }
    }

    /// Build a catalog giving every kind the same footprint.
    pub const fn uniform(footprint: Footprint) -> Self {
        let spec = SegmentSpec::new(footprint);
        Self::new(spec, spec, spec, spec)
    }

    /// The spec for one kind.
    pub const fn spec(&self, kind: SegmentKind) -> &SegmentSpec {
        match kind {
            SegmentKind::Start => &self.start,
            SegmentKind::Middle => &self.middle,
            SegmentKind::Filler => &self.filler,
            SegmentKind::End => &self.end,
        }
    }

    /// Spacing of a kind along the travel axis: the footprint extent,
    /// i.e. how far the next segment's anchor must be offset from this
    /// segment's anchor for the two to sit adjacent. Always at least 1.
    pub fn spacing(&self, kind: SegmentKind, axis: Axis) -> i32 {
        self.spec(kind).footprint.extent_along(axis).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_lookup_covers_every_kind() {
        let start = SegmentSpec::new(Footprint::from_size(4, 1, 2).unwrap());
        let middle = SegmentSpec::new(Footprint::from_size(5, 1, 2).unwrap());
        let filler = SegmentSpec::new(Footprint::UNIT);
        let end = SegmentSpec::new(Footprint::from_size(4, 1, 2).unwrap());
        let catalog = SegmentCatalog::new(start, middle, filler, end);

        assert_eq!(*catalog.spec(SegmentKind::Start), start);
        assert_eq!(*catalog.spec(SegmentKind::Middle), middle);
        assert_eq!(*catalog.spec(SegmentKind::Filler), filler);
        assert_eq!(*catalog.spec(SegmentKind::End), end);
    }

    #[test]
    fn spacing_follows_the_travel_axis() {
        let catalog = SegmentCatalog::uniform(Footprint::from_size(3, 1, 2).unwrap());
        assert_eq!(catalog.spacing(SegmentKind::Start, Axis::X), 3);
        assert_eq!(catalog.spacing(SegmentKind::Start, Axis::Y), 1);
        assert_eq!(catalog.spacing(SegmentKind::Start, Axis::Z), 2);
    }
}
