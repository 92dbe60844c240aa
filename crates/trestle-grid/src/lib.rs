//! Spatial occupancy registry and grid-to-world transform for Trestle.
//!
//! [`SpatialRegistry`] is the single owner of occupancy truth: the
//! authoritative map from grid cell to occupying object, a secondary
//! kind index for typed enumeration, and the placement-validation
//! queries every other layer builds on.
//!
//! [`GridTransform`] converts between continuous world positions and
//! discrete cells. It is pure and the registry never consults it; the
//! two live side by side because callers almost always need both.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod registry;
pub mod transform;

pub use error::GridError;
pub use registry::SpatialRegistry;
pub use transform::GridTransform;
