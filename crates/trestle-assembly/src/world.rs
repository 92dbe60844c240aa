//! The world facade: the complete operation surface other layers call.

use crate::bridge::Bridge;
use crate::error::BridgeError;
use crate::tracker::{BridgeAssembly, WorldServices};
use crate::traits::{SegmentFactory, WorldListener};
use trestle_core::{
    BridgeId, Cell, Footprint, ObjectId, ObjectKind, Orientation, PlacedObject, SegmentKind,
};
use trestle_grid::SpatialRegistry;
use trestle_planner::SegmentCatalog;

/// Owns the registry, catalog, and assembly, and wires in the two
/// injected collaborators.
///
/// Collaborators are taken by value at construction — there is no
/// global locator and nothing here is a singleton, so a test or a
/// second play area can hold its own fully independent world.
///
/// # Examples
///
/// ```
/// use trestle_assembly::{SegmentFactory, World};
/// use trestle_core::{Cell, Footprint, ObjectId, ObjectKind, Orientation, SegmentKind};
/// use trestle_planner::SegmentCatalog;
///
/// struct Spawner;
/// impl SegmentFactory for Spawner {
///     fn spawn(&mut self, _: ObjectKind, _: Cell, _: Orientation) -> ObjectId {
///         ObjectId::next()
///     }
///     fn despawn(&mut self, _: ObjectId) {}
/// }
///
/// let catalog = SegmentCatalog::uniform(Footprint::UNIT);
/// let mut world = World::new(catalog, Spawner, ());
///
/// let start = world.try_place(SegmentKind::Start, Cell::ZERO).unwrap();
/// let end = world.try_place(SegmentKind::End, Cell::new(5, 0, 0)).unwrap();
/// // The aligned pair auto-connected into a bridge.
/// let bridge = world.bridge_for_segment(start).unwrap();
/// assert_eq!(bridge.end(), end);
/// assert_eq!(bridge.middles().len(), 4);
/// ```
pub struct World<F: SegmentFactory, L: WorldListener> {
    registry: SpatialRegistry,
    assembly: BridgeAssembly,
    catalog: SegmentCatalog,
    factory: F,
    listener: L,
}

impl<F: SegmentFactory, L: WorldListener> World<F, L> {
    /// Create a world from a catalog and the two collaborators.
    pub fn new(catalog: SegmentCatalog, factory: F, listener: L) -> Self {
        Self {
            registry: SpatialRegistry::new(),
            assembly: BridgeAssembly::new(),
            catalog,
            factory,
            listener,
        }
    }

    // ── Placement ───────────────────────────────────────────────

    /// Place a bridge segment of `kind` anchored at `anchor`.
    ///
    /// Returns `None` when any footprint cell is taken — an expected,
    /// frequent outcome during interactive placement, not an error. On
    /// success the segment is spawned, registered, announced to the
    /// listener, and (for endpoint kinds) auto-connection is attempted.
    ///
    /// Manual placements carry the default yaw; the input layer orients
    /// its drag preview itself and bridge construction recomputes
    /// orientations from the travel direction.
    pub fn try_place(&mut self, kind: SegmentKind, anchor: Cell) -> Option<ObjectId> {
        self.place(ObjectKind::Segment(kind), anchor, self.catalog.spec(kind).footprint)
    }

    /// Place a non-segment occupant with an explicit footprint.
    pub fn place_prop(&mut self, anchor: Cell, footprint: Footprint) -> Option<ObjectId> {
        self.place(ObjectKind::Prop, anchor, footprint)
    }

    fn place(&mut self, kind: ObjectKind, anchor: Cell, footprint: Footprint) -> Option<ObjectId> {
        if !self.registry.can_place(anchor, &footprint, None) {
            return None;
        }
        let id = self.factory.spawn(kind, anchor, Orientation::default());
        let object = PlacedObject::new(id, kind, anchor, footprint);
        self.registry.register(object);
        self.listener.placed(&object);
        self.assembly.on_segment_placed(
            id,
            &mut WorldServices {
                registry: &mut self.registry,
                catalog: &self.catalog,
                factory: &mut self.factory,
                listener: &mut self.listener,
            },
        );
        Some(id)
    }

    /// Remove an object from the grid and destroy its instance.
    ///
    /// If the object was a bridge member the whole bridge dissolves as a
    /// side effect. Returns `false` (no-op) on an unknown id, so
    /// teardown code may remove unconditionally.
    pub fn remove(&mut self, id: ObjectId) -> bool {
        let Some(object) = self.registry.get(id).copied() else {
            return false;
        };
        self.registry.unregister(id);
        self.assembly.on_segment_removed(
            id,
            &mut WorldServices {
                registry: &mut self.registry,
                catalog: &self.catalog,
                factory: &mut self.factory,
                listener: &mut self.listener,
            },
        );
        self.factory.despawn(id);
        self.listener.removed(&object);
        true
    }

    /// Destroy everything and drop all indices. Used on scene reset.
    ///
    /// Reset is not removal: no per-object notifications are emitted.
    pub fn clear(&mut self) {
        let ids: Vec<ObjectId> = self.registry.objects().map(|o| o.id).collect();
        self.registry.clear();
        self.assembly.clear();
        for id in ids {
            self.factory.despawn(id);
        }
    }

    // ── Bridges ─────────────────────────────────────────────────

    /// Join two standalone endpoints into a bridge. See
    /// [`BridgeAssembly::create_bridge`].
    pub fn create_bridge(&mut self, a: ObjectId, b: ObjectId) -> Result<BridgeId, BridgeError> {
        self.assembly.create_bridge(
            a,
            b,
            &mut WorldServices {
                registry: &mut self.registry,
                catalog: &self.catalog,
                factory: &mut self.factory,
                listener: &mut self.listener,
            },
        )
    }

    /// Dissolve a bridge, keeping or destroying its endpoints. See
    /// [`BridgeAssembly::break_bridge`].
    pub fn break_bridge(&mut self, id: BridgeId, keep_endpoints: bool) -> bool {
        self.assembly.break_bridge(
            id,
            keep_endpoints,
            &mut WorldServices {
                registry: &mut self.registry,
                catalog: &self.catalog,
                factory: &mut self.factory,
                listener: &mut self.listener,
            },
        )
    }

    // ── Queries ─────────────────────────────────────────────────

    /// `true` iff the footprint fits at `anchor`, ignoring `ignore`.
    pub fn can_place(&self, anchor: Cell, footprint: &Footprint, ignore: Option<ObjectId>) -> bool {
        self.registry.can_place(anchor, footprint, ignore)
    }

    /// The object claiming `cell`, if any.
    pub fn object_at(&self, cell: Cell) -> Option<&PlacedObject> {
        self.registry.object_at(cell)
    }

    /// Objects of one kind, in registration order.
    pub fn objects_of_kind(&self, kind: ObjectKind) -> impl Iterator<Item = &PlacedObject> {
        self.registry.objects_of_kind(kind)
    }

    /// Objects within the cube of `radius` around `center`.
    pub fn objects_in_radius(&self, center: Cell, radius: u32) -> Vec<&PlacedObject> {
        self.registry.objects_in_radius(center, radius)
    }

    /// The bridge a segment belongs to, if any.
    pub fn bridge_for_segment(&self, id: ObjectId) -> Option<&Bridge> {
        self.assembly.bridge_for_segment(id)
    }

    /// All active bridges, oldest first.
    pub fn active_bridges(&self) -> impl Iterator<Item = &Bridge> {
        self.assembly.bridges()
    }

    /// Standalone endpoints in insertion order.
    pub fn standalone_segments(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.assembly.standalone()
    }

    /// Read-only access to the registry.
    pub fn registry(&self) -> &SpatialRegistry {
        &self.registry
    }

    /// The segment catalog this world was configured with.
    pub fn catalog(&self) -> &SegmentCatalog {
        &self.catalog
    }

    /// Read-only access to the injected factory.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Read-only access to the injected listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }
}
