//! Collaborator traits: the seams to the excluded host layers.

use crate::bridge::Bridge;
use trestle_core::{Cell, ObjectId, ObjectKind, Orientation, PlacedObject};

/// Creation and destruction of placed-object instances.
///
/// The host application owns the actual instances (meshes, physics
/// bodies, save-file rows); the core only reasons about cell occupancy
/// and kind. A factory is handed to [`World`](crate::World) at
/// construction, so bridge building can instantiate intermediate
/// segments and tear them down again on rollback.
///
/// # Contract
///
/// - `spawn` returns a fresh [`ObjectId`] (typically
///   [`ObjectId::next()`]) naming the new instance.
/// - `despawn` must be idempotent: bridge teardown and direct removal
///   can both reach the same id, and the second call must be a no-op,
///   mirroring the registry's defensive semantics.
pub trait SegmentFactory {
    /// Create an instance of `kind` at `cell`, yawed by `orientation`.
    fn spawn(&mut self, kind: ObjectKind, cell: Cell, orientation: Orientation) -> ObjectId;

    /// Destroy the instance named by `id`. Must be a no-op when the id
    /// is unknown or already despawned.
    fn despawn(&mut self, id: ObjectId);
}

/// Placement/removal notifications for the excluded UI and inventory
/// layers.
///
/// Every method defaults to a no-op so implementors opt into only the
/// notifications they use. The core triggers these but never depends on
/// the handlers' behavior.
pub trait WorldListener {
    /// An object was placed and registered (including intermediates
    /// created during bridge construction).
    fn placed(&mut self, _object: &PlacedObject) {}

    /// An object was unregistered and is about to be destroyed (or was
    /// rolled back mid-construction).
    fn removed(&mut self, _object: &PlacedObject) {}

    /// A bridge finished assembling.
    fn bridge_formed(&mut self, _bridge: &Bridge) {}

    /// A bridge was dissolved. `endpoints_kept` is `true` when its
    /// Start and End survived as standalone segments.
    fn bridge_broken(&mut self, _bridge: &Bridge, _endpoints_kept: bool) {}
}

/// The null listener: every notification is dropped.
impl WorldListener for () {}
