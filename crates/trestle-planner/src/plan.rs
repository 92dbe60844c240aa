//! The validated output of bridge planning.

use trestle_core::{Cell, Direction, Orientation, SegmentKind};

/// One segment the plan asks for: which kind, anchored where, facing how.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentPlacement {
    /// The kind of piece to place.
    pub kind: SegmentKind,
    /// The anchor cell.
    pub cell: Cell,
    /// The yaw the piece is placed with.
    pub orientation: Orientation,
}

/// An ordered, validated sequence of segment placements spanning a
/// start/end pair.
///
/// Placements are always emitted in bridge order: Start first, End last,
/// filling pieces between. A plan holds at minimum `[Start, End]`.
/// Existence of a `BridgePlan` implies feasible geometry; infeasible
/// requests are [`PlanError`](crate::PlanError)s instead, so an invalid
/// plan with placements cannot be constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgePlan {
    /// Anchor of the Start segment.
    pub start: Cell,
    /// Anchor of the End segment.
    pub end: Cell,
    /// Travel direction from start to end.
    pub direction: Direction,
    /// The placements, in bridge order.
    pub placements: Vec<SegmentPlacement>,
    /// Set when the endpoints sit closer together than their combined
    /// half-extents plus the one-cell seam: the plan is still usable but
    /// the Start and End models will visually overlap.
    pub endpoint_overlap: bool,
    /// Gap cells left uncovered because the filler spacing does not
    /// divide the leftover evenly. Zero whenever filler spacing is 1.
    pub residual_gap: u32,
}

impl BridgePlan {
    /// Total number of placements, endpoints included.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Always `false`: a plan holds at least Start and End.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of placements of one kind.
    pub fn count_of(&self, kind: SegmentKind) -> usize {
        self.placements.iter().filter(|p| p.kind == kind).count()
    }

    /// The placements strictly between Start and End, in order.
    ///
    /// This is what bridge construction instantiates: the endpoints
    /// already exist on the grid.
    pub fn interior(&self) -> &[SegmentPlacement] {
        &self.placements[1..self.placements.len() - 1]
    }
}
