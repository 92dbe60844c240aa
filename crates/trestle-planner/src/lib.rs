//! Pure bridge-span planning for Trestle.
//!
//! Given two endpoint anchor cells and a [`SegmentCatalog`] of per-kind
//! footprints, [`plan_bridge`] computes the exact ordered sequence of
//! Start / Middle / Filler / End placements that spans the distance, or
//! reports infeasibility. The planner is a deterministic, side-effect-free
//! function: it never touches the registry, so callers validate and apply
//! the plan themselves.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod plan;
pub mod planner;

pub use catalog::{SegmentCatalog, SegmentSpec};
pub use error::PlanError;
pub use plan::{BridgePlan, SegmentPlacement};
pub use planner::plan_bridge;
