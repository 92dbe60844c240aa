//! The bridge-planning algorithm.

use crate::catalog::SegmentCatalog;
use crate::error::PlanError;
use crate::plan::{BridgePlan, SegmentPlacement};
use trestle_core::{Cell, Direction, Orientation, SegmentKind};

/// Compute the placement plan spanning `start` to `end`.
///
/// A deterministic, side-effect-free function of its inputs. The
/// endpoints must differ along exactly one axis; anything else is
/// [`PlanError::NotStraightLine`].
///
/// The gap between the endpoints' half-extents (minus a one-cell seam)
/// is packed greedily with Middle pieces; leftover cells are absorbed by
/// Filler pieces split evenly before and after the middle block so the
/// fill reads symmetric. Endpoints closer together than their combined
/// half-extents still plan successfully with
/// [`endpoint_overlap`](BridgePlan::endpoint_overlap) set; anchors are
/// never placed at negative travel offsets.
///
/// # Examples
///
/// ```
/// use trestle_core::{Cell, Footprint, SegmentKind};
/// use trestle_planner::{plan_bridge, SegmentCatalog};
///
/// let catalog = SegmentCatalog::uniform(Footprint::UNIT);
/// let plan = plan_bridge(Cell::ZERO, Cell::new(5, 0, 0), &catalog).unwrap();
/// assert_eq!(plan.len(), 6);
/// assert_eq!(plan.count_of(SegmentKind::Middle), 4);
///
/// // Diagonal endpoints are infeasible.
/// assert!(plan_bridge(Cell::ZERO, Cell::new(5, 0, 5), &catalog).is_err());
/// ```
pub fn plan_bridge(
    start: Cell,
    end: Cell,
    catalog: &SegmentCatalog,
) -> Result<BridgePlan, PlanError> {
    let delta = end - start;
    let direction =
        Direction::from_delta(delta).ok_or(PlanError::NotStraightLine { delta })?;
    let axis = direction.axis();
    let orientation = Orientation::for_direction(direction);

    let start_spacing = catalog.spacing(SegmentKind::Start, axis);
    let middle_spacing = catalog.spacing(SegmentKind::Middle, axis);
    let filler_spacing = catalog.spacing(SegmentKind::Filler, axis);
    let end_spacing = catalog.spacing(SegmentKind::End, axis);

    // The gap between the endpoints' half-extents, minus one cell
    // reserved as the seam.
    let total_distance = start.manhattan(end) as i32;
    let gap_cells = total_distance - start_spacing / 2 - end_spacing / 2 - 1;
    let endpoint_overlap = gap_cells < 0;
    let gap_cells = gap_cells.max(0);

    // Greedy pack: as many middles as fit, fillers one spacing-unit at a
    // time for the leftover. A filler spacing above 1 cannot fill every
    // leftover cell; the remainder is a residual gap, not a failure.
    let middle_count = gap_cells / middle_spacing;
    let leftover = gap_cells - middle_count * middle_spacing;
    let filler_count = leftover / filler_spacing;
    let residual_gap = (leftover % filler_spacing) as u32;

    // Fillers split around the middle block so they read symmetric.
    let fillers_before = filler_count / 2;
    let fillers_after = filler_count - fillers_before;

    let mut placements =
        Vec::with_capacity((middle_count + filler_count + 2) as usize);
    placements.push(SegmentPlacement {
        kind: SegmentKind::Start,
        cell: start,
        orientation,
    });

    // Cursor: travel offset from the start anchor, beginning one cell
    // past the Start piece's half-extent.
    let mut cursor = start_spacing / 2 + 1;
    for _ in 0..fillers_before {
        placements.push(SegmentPlacement {
            kind: SegmentKind::Filler,
            cell: start.offset(direction, cursor),
            orientation,
        });
        cursor += filler_spacing;
    }

    if middle_count > 0 {
        // Center the middle block: anchors sit mid-piece.
        cursor += middle_spacing / 2;
        for _ in 0..middle_count {
            placements.push(SegmentPlacement {
                kind: SegmentKind::Middle,
                cell: start.offset(direction, cursor),
                orientation,
            });
            cursor += middle_spacing;
        }
        if fillers_after > 0 {
            // Re-anchor just past the last middle's half-extent.
            cursor = cursor - middle_spacing + middle_spacing / 2 + 1;
        }
    }

    for _ in 0..fillers_after {
        placements.push(SegmentPlacement {
            kind: SegmentKind::Filler,
            cell: start.offset(direction, cursor),
            orientation,
        });
        cursor += filler_spacing;
    }

    placements.push(SegmentPlacement {
        kind: SegmentKind::End,
        cell: end,
        orientation,
    });

    Ok(BridgePlan {
        start,
        end,
        direction,
        placements,
        endpoint_overlap,
        residual_gap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SegmentSpec;
    use proptest::prelude::*;
    use trestle_core::{Axis, Footprint};

    fn unit_catalog() -> SegmentCatalog {
        SegmentCatalog::uniform(Footprint::UNIT)
    }

    /// Catalog with the given extents along X (all pieces 1 deep, 1 tall).
    fn catalog_x(start: u32, middle: u32, filler: u32, end: u32) -> SegmentCatalog {
        let fp = |w| SegmentSpec::new(Footprint::from_size(w, 1, 1).unwrap());
        SegmentCatalog::new(fp(start), fp(middle), fp(filler), fp(end))
    }

    fn cells_of(plan: &BridgePlan) -> Vec<Cell> {
        plan.placements.iter().map(|p| p.cell).collect()
    }

    // ── Feasibility ─────────────────────────────────────────────

    #[test]
    fn rejects_diagonal_and_coincident_endpoints() {
        let catalog = unit_catalog();
        for end in [
            Cell::new(3, 3, 0),
            Cell::new(1, 1, 1),
            Cell::new(0, 2, 2),
            Cell::ZERO,
        ] {
            let result = plan_bridge(Cell::ZERO, end, &catalog);
            assert!(
                matches!(result, Err(PlanError::NotStraightLine { .. })),
                "expected NotStraightLine for end {end}, got {result:?}"
            );
        }
    }

    #[test]
    fn plans_along_each_axis_and_sign() {
        let catalog = unit_catalog();
        for (end, axis) in [
            (Cell::new(4, 0, 0), Axis::X),
            (Cell::new(-4, 0, 0), Axis::X),
            (Cell::new(0, 4, 0), Axis::Y),
            (Cell::new(0, 0, -4), Axis::Z),
        ] {
            let plan = plan_bridge(Cell::ZERO, end, &catalog).unwrap();
            assert_eq!(plan.direction.axis(), axis);
            assert_eq!(plan.placements.first().map(|p| p.cell), Some(Cell::ZERO));
            assert_eq!(plan.placements.last().map(|p| p.cell), Some(end));
        }
    }

    // ── Worked spans ────────────────────────────────────────────

    #[test]
    fn unit_pieces_span_six_cells() {
        // gap = 5 - 0 - 0 - 1 = 4 → four middles, no fillers.
        let plan = plan_bridge(Cell::ZERO, Cell::new(5, 0, 0), &unit_catalog()).unwrap();
        assert_eq!(plan.count_of(SegmentKind::Middle), 4);
        assert_eq!(plan.count_of(SegmentKind::Filler), 0);
        assert_eq!(plan.len(), 6);
        assert!(!plan.endpoint_overlap);
        assert_eq!(plan.residual_gap, 0);
        let expected: Vec<Cell> = (0..=5).map(|x| Cell::new(x, 0, 0)).collect();
        assert_eq!(cells_of(&plan), expected);
    }

    #[test]
    fn wide_endpoints_pack_three_girders() {
        // Widths 4/5/1/4 over a 20-cell span:
        // gap = 20 - 2 - 2 - 1 = 15 → three middles, no fillers.
        let catalog = catalog_x(4, 5, 1, 4);
        let plan = plan_bridge(Cell::ZERO, Cell::new(20, 0, 0), &catalog).unwrap();
        assert_eq!(plan.count_of(SegmentKind::Middle), 3);
        assert_eq!(plan.count_of(SegmentKind::Filler), 0);
        assert_eq!(plan.len(), 5);
        // Anchors: start edge at 2, first girder centered at 5, then 10, 15.
        assert_eq!(
            cells_of(&plan),
            vec![
                Cell::ZERO,
                Cell::new(5, 0, 0),
                Cell::new(10, 0, 0),
                Cell::new(15, 0, 0),
                Cell::new(20, 0, 0),
            ]
        );
    }

    #[test]
    fn leftover_cells_become_fillers_split_around_the_block() {
        // Middles of 3 over gap 8: two middles, leftover 2 → one filler
        // each side of the block.
        let catalog = catalog_x(1, 3, 1, 1);
        let plan = plan_bridge(Cell::ZERO, Cell::new(9, 0, 0), &catalog).unwrap();
        assert_eq!(plan.count_of(SegmentKind::Middle), 2);
        assert_eq!(plan.count_of(SegmentKind::Filler), 2);
        let kinds: Vec<SegmentKind> = plan.placements.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SegmentKind::Start,
                SegmentKind::Filler,
                SegmentKind::Middle,
                SegmentKind::Middle,
                SegmentKind::Filler,
                SegmentKind::End,
            ]
        );
        // Filler at 1; middles centered at 3 and 6; trailing filler at 8.
        assert_eq!(
            cells_of(&plan),
            vec![
                Cell::ZERO,
                Cell::new(1, 0, 0),
                Cell::new(3, 0, 0),
                Cell::new(6, 0, 0),
                Cell::new(8, 0, 0),
                Cell::new(9, 0, 0),
            ]
        );
    }

    #[test]
    fn close_endpoints_overlap_but_still_plan() {
        // Endpoints one cell apart with 4-wide pieces: gap would be -4.
        let catalog = catalog_x(4, 5, 1, 4);
        let plan = plan_bridge(Cell::ZERO, Cell::new(1, 0, 0), &catalog).unwrap();
        assert!(plan.endpoint_overlap);
        assert_eq!(plan.len(), 2);
        assert_eq!(
            cells_of(&plan),
            vec![Cell::ZERO, Cell::new(1, 0, 0)]
        );
    }

    #[test]
    fn coarse_fillers_leave_a_residual_gap() {
        // No middles fit (width 10 > gap 4); fillers of width 3 cover
        // only 3 of the 4 leftover cells.
        let catalog = catalog_x(1, 10, 3, 1);
        let plan = plan_bridge(Cell::ZERO, Cell::new(5, 0, 0), &catalog).unwrap();
        assert_eq!(plan.count_of(SegmentKind::Middle), 0);
        assert_eq!(plan.count_of(SegmentKind::Filler), 1);
        assert_eq!(plan.residual_gap, 1);
    }

    #[test]
    fn minimal_span_is_start_then_end() {
        let plan = plan_bridge(Cell::ZERO, Cell::new(1, 0, 0), &unit_catalog()).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.interior(), &[]);
        assert!(!plan.endpoint_overlap);
    }

    #[test]
    fn every_placement_shares_one_orientation() {
        let catalog = catalog_x(2, 3, 1, 2);
        let plan = plan_bridge(Cell::ZERO, Cell::new(0, 0, -14), &catalog).unwrap();
        let first = plan.placements[0].orientation;
        assert!(plan.placements.iter().all(|p| p.orientation == first));
        assert_eq!(first, Orientation::for_direction(plan.direction));
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_widths() -> impl Strategy<Value = (u32, u32, u32, u32)> {
        (1u32..6, 1u32..8, 1u32..3, 1u32..6)
    }

    proptest! {
        #[test]
        fn deterministic_for_identical_inputs(
            span in 1i32..200,
            widths in arb_widths(),
        ) {
            let (s, m, f, e) = widths;
            let catalog = catalog_x(s, m, f, e);
            let end = Cell::new(span, 0, 0);
            let a = plan_bridge(Cell::ZERO, end, &catalog).unwrap();
            let b = plan_bridge(Cell::ZERO, end, &catalog).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn structure_holds_for_arbitrary_spans(
            start_x in -100i32..100,
            span in 1i32..200,
            negative in any::<bool>(),
            widths in arb_widths(),
        ) {
            let (s, m, f, e) = widths;
            let catalog = catalog_x(s, m, f, e);
            let start = Cell::new(start_x, 0, 0);
            let end = start + Cell::new(if negative { -span } else { span }, 0, 0);
            let plan = plan_bridge(start, end, &catalog).unwrap();

            // Bookends.
            prop_assert_eq!(plan.placements.first().map(|p| (p.kind, p.cell)),
                Some((SegmentKind::Start, start)));
            prop_assert_eq!(plan.placements.last().map(|p| (p.kind, p.cell)),
                Some((SegmentKind::End, end)));

            // Exactly middles + fillers + 2 placements, in bridge order.
            let middles = plan.count_of(SegmentKind::Middle);
            let fillers = plan.count_of(SegmentKind::Filler);
            prop_assert_eq!(plan.len(), middles + fillers + 2);

            // Every anchor lies on the travel segment, never behind the
            // start or past the end.
            let total = start.manhattan(end);
            for p in &plan.placements {
                let along = start.manhattan(p.cell);
                prop_assert!(along <= total, "anchor {} overshoots", p.cell);
                prop_assert_eq!(p.cell, start.offset(plan.direction, along as i32));
            }

            // Interior anchors strictly increase along the travel axis.
            let offsets: Vec<u32> = plan
                .placements
                .iter()
                .map(|p| start.manhattan(p.cell))
                .collect();
            for pair in offsets.windows(2) {
                prop_assert!(pair[0] <= pair[1]);
            }
        }
    }
}
