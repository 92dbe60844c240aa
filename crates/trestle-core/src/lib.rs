//! Core grid types for the Trestle building-placement framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the registry, planner, and assembly layers: cell
//! coordinates, axes and directions, footprints, identifiers, segment and
//! object kinds, orientations, and the placed-object record.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod footprint;
pub mod id;
pub mod kind;
pub mod object;
pub mod orientation;

pub use cell::{Axis, Cell, Direction};
pub use footprint::{Footprint, FootprintError};
pub use id::{BridgeId, ObjectId};
pub use kind::{ObjectKind, SegmentKind};
pub use object::PlacedObject;
pub use orientation::Orientation;
