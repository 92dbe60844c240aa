//! Trestle: grid-based modular bridge building.
//!
//! This is the top-level facade crate re-exporting the public API from
//! all Trestle sub-crates. For most users, adding `trestle` as a single
//! dependency is sufficient.
//!
//! Players place Start/Middle/Filler/End bridge segments on a discrete
//! 3D grid. The [`grid`] registry validates and tracks occupancy, the
//! [`planner`] computes how many pieces of which kind exactly span two
//! endpoints, and the [`assembly`] layer auto-connects alignable
//! endpoints into [`Bridge`](assembly::Bridge) entities — atomically,
//! with full rollback when an intermediate piece cannot be placed.
//!
//! # Quick start
//!
//! ```rust
//! use trestle::prelude::*;
//!
//! // The host side of the seam: instance creation is injected.
//! struct Spawner;
//! impl SegmentFactory for Spawner {
//!     fn spawn(&mut self, _: ObjectKind, _: Cell, _: Orientation) -> ObjectId {
//!         ObjectId::next()
//!     }
//!     fn despawn(&mut self, _: ObjectId) {}
//! }
//!
//! // Single-cell pieces: a plank bridge.
//! let catalog = SegmentCatalog::uniform(Footprint::UNIT);
//! let mut world = World::new(catalog, Spawner, ());
//!
//! let start = world.try_place(SegmentKind::Start, Cell::ZERO).unwrap();
//! let end = world.try_place(SegmentKind::End, Cell::new(5, 0, 0)).unwrap();
//!
//! // The aligned pair auto-connected; four middles fill the gap.
//! let bridge = world.bridge_for_segment(start).unwrap();
//! assert_eq!(bridge.middles().len(), 4);
//! assert!(world.registry().is_cell_occupied(Cell::new(3, 0, 0)));
//!
//! // Removing any one plank collapses the span; the endpoints survive.
//! let plank = bridge.middles()[0];
//! world.remove(plank);
//! assert_eq!(world.active_bridges().count(), 0);
//! assert_eq!(world.standalone_segments().count(), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `trestle-core` | Cells, footprints, ids, kinds, orientations |
//! | [`grid`] | `trestle-grid` | [`SpatialRegistry`](grid::SpatialRegistry), [`GridTransform`](grid::GridTransform) |
//! | [`planner`] | `trestle-planner` | [`plan_bridge`](planner::plan_bridge), [`SegmentCatalog`](planner::SegmentCatalog) |
//! | [`assembly`] | `trestle-assembly` | [`World`](assembly::World), [`BridgeAssembly`](assembly::BridgeAssembly) |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use trestle_assembly as assembly;
pub use trestle_core as types;
pub use trestle_grid as grid;
pub use trestle_planner as planner;

/// The most commonly used items, re-exported flat.
pub mod prelude {
    pub use trestle_assembly::{
        Bridge, BridgeAssembly, BridgeError, SegmentFactory, World, WorldListener,
    };
    pub use trestle_core::{
        Axis, BridgeId, Cell, Direction, Footprint, ObjectId, ObjectKind, Orientation,
        PlacedObject, SegmentKind,
    };
    pub use trestle_grid::{GridTransform, SpatialRegistry};
    pub use trestle_planner::{plan_bridge, BridgePlan, PlanError, SegmentCatalog, SegmentSpec};
}
