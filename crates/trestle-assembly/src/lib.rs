//! Bridge assembly, connection tracking, and the world facade.
//!
//! [`BridgeAssembly`] is the state-tracking layer above the registry and
//! planner: it owns the standalone-segment set and the active-bridge
//! collection, auto-connects compatible endpoints, constructs bridges
//! atomically (all intermediate segments place, or the whole attempt
//! rolls back), and dissolves a bridge when any member leaves the grid.
//!
//! [`World`] wires the registry, catalog, and assembly together with the
//! two injected collaborators — a [`SegmentFactory`] that owns instance
//! creation and a [`WorldListener`] that receives placement/removal
//! notifications — and exposes the complete public operation surface.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bridge;
pub mod error;
pub mod tracker;
pub mod traits;
pub mod world;

#[cfg(test)]
pub(crate) mod testing;

pub use bridge::Bridge;
pub use error::BridgeError;
pub use tracker::{BridgeAssembly, WorldServices};
pub use traits::{SegmentFactory, WorldListener};
pub use world::World;
