//! Standalone-segment tracking, auto-connection, and bridge lifecycle.

use crate::bridge::Bridge;
use crate::error::BridgeError;
use crate::traits::{SegmentFactory, WorldListener};
use indexmap::{IndexMap, IndexSet};
use trestle_core::{BridgeId, ObjectId, ObjectKind, PlacedObject, SegmentKind};
use trestle_grid::SpatialRegistry;
use trestle_planner::{plan_bridge, SegmentCatalog};

/// The collaborators an assembly operation works against, borrowed for
/// the duration of one call.
///
/// Bundling them keeps the operation signatures flat and makes explicit
/// that the assembly layer never owns the registry or the factory — the
/// [`World`](crate::World) facade does.
pub struct WorldServices<'a, F: SegmentFactory, L: WorldListener> {
    /// Occupancy truth.
    pub registry: &'a mut SpatialRegistry,
    /// Read-only per-kind footprint metadata.
    pub catalog: &'a SegmentCatalog,
    /// Instance creation/destruction.
    pub factory: &'a mut F,
    /// Placement/removal notifications.
    pub listener: &'a mut L,
}

/// Maintains the standalone set and the active-bridge collection, and
/// decides when two standalone endpoints should be auto-joined.
///
/// Per-endpoint state machine: `Unplaced → Standalone →
/// Member-of-Bridge → (bridge broken) → Standalone → Unplaced`. The
/// transition into a bridge happens automatically whenever a newly
/// placed Start/End finds a standalone counterpart sharing its X or Z
/// grid coordinate.
///
/// The standalone set iterates in insertion order, so when several
/// candidates qualify the earliest-placed one wins — auto-connection is
/// deterministic.
#[derive(Debug, Default)]
pub struct BridgeAssembly {
    standalone: IndexSet<ObjectId>,
    bridges: IndexMap<BridgeId, Bridge>,
    membership: IndexMap<ObjectId, BridgeId>,
}

impl BridgeAssembly {
    /// Create an empty assembly.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Placement / removal hooks ───────────────────────────────

    /// React to a segment arriving on the grid.
    ///
    /// Endpoint kinds (Start/End) enter the standalone set and attempt
    /// auto-connection; other kinds are ignored. Returns the formed
    /// bridge's id when a connection succeeded.
    pub fn on_segment_placed<F: SegmentFactory, L: WorldListener>(
        &mut self,
        id: ObjectId,
        services: &mut WorldServices<'_, F, L>,
    ) -> Option<BridgeId> {
        let object = *services.registry.get(id)?;
        if !object.kind.is_endpoint_segment() {
            return None;
        }
        self.standalone.insert(id);
        let partner = self.find_connectable(&object, services.registry)?;
        // A failed attempt (blocked cell, degenerate geometry) restores
        // the standalone set itself; the segment simply stays standalone.
        self.create_bridge(id, partner, services).ok()
    }

    /// React to a segment leaving the grid.
    ///
    /// Call after the registry entry is gone. If the segment belonged to
    /// a bridge, the whole bridge is broken with endpoints kept —
    /// removing one plank collapses the span — and the removed segment
    /// itself is excluded from the standalone set, since it is no longer
    /// placed. Returns the dissolved bridge's id, if any.
    pub fn on_segment_removed<F: SegmentFactory, L: WorldListener>(
        &mut self,
        id: ObjectId,
        services: &mut WorldServices<'_, F, L>,
    ) -> Option<BridgeId> {
        self.standalone.shift_remove(&id);
        let bridge_id = self.membership.get(&id).copied()?;
        self.break_bridge(bridge_id, true, services);
        self.standalone.shift_remove(&id);
        Some(bridge_id)
    }

    /// First standalone segment of the opposite endpoint kind sharing
    /// the segment's X or Z coordinate, scanning in insertion order.
    fn find_connectable(
        &self,
        segment: &PlacedObject,
        registry: &SpatialRegistry,
    ) -> Option<ObjectId> {
        let kind = segment.kind.segment_kind()?;
        let wanted = ObjectKind::Segment(kind.counterpart()?);
        for &candidate in &self.standalone {
            if candidate == segment.id {
                continue;
            }
            let Some(other) = registry.get(candidate) else {
                continue;
            };
            if other.kind != wanted {
                continue;
            }
            if other.anchor.x == segment.anchor.x || other.anchor.z == segment.anchor.z {
                return Some(candidate);
            }
        }
        None
    }

    // ── Bridge lifecycle ────────────────────────────────────────

    /// Join two standalone endpoints into a bridge, instantiating and
    /// registering every intermediate segment the plan calls for.
    ///
    /// Order-insensitive: the Start endpoint is identified by kind, so
    /// passing End-before-Start is fine. Atomic: if any intermediate
    /// placement is blocked, everything placed so far is unregistered
    /// and despawned, both endpoints return to the standalone set, and
    /// the error names the blocked cell.
    pub fn create_bridge<F: SegmentFactory, L: WorldListener>(
        &mut self,
        a: ObjectId,
        b: ObjectId,
        services: &mut WorldServices<'_, F, L>,
    ) -> Result<BridgeId, BridgeError> {
        if a == b {
            return Err(BridgeError::SameSegment { id: a });
        }
        for id in [a, b] {
            if let Some(&bridge) = self.membership.get(&id) {
                return Err(BridgeError::AlreadyBridged { id, bridge });
            }
        }
        let object_a = *services
            .registry
            .get(a)
            .ok_or(BridgeError::UnknownSegment { id: a })?;
        let object_b = *services
            .registry
            .get(b)
            .ok_or(BridgeError::UnknownSegment { id: b })?;
        let kind_a = endpoint_kind(&object_a)?;
        let kind_b = endpoint_kind(&object_b)?;
        if kind_a == kind_b {
            return Err(BridgeError::EndpointsSameKind { kind: kind_a });
        }

        // Normalize ordering: Start first.
        let (start, end, start_obj, end_obj) = if kind_a == SegmentKind::End {
            (b, a, object_b, object_a)
        } else {
            (a, b, object_a, object_b)
        };

        self.standalone.shift_remove(&start);
        self.standalone.shift_remove(&end);

        let plan = match plan_bridge(start_obj.anchor, end_obj.anchor, services.catalog) {
            Ok(plan) => plan,
            Err(e) => {
                self.standalone.insert(start);
                self.standalone.insert(end);
                return Err(e.into());
            }
        };

        let mut middles = Vec::new();
        let mut fillers = Vec::new();
        let mut placed: Vec<ObjectId> = Vec::new();
        for placement in plan.interior() {
            let footprint = services.catalog.spec(placement.kind).footprint;
            if !services.registry.can_place(placement.cell, &footprint, None) {
                roll_back(&placed, services);
                self.standalone.insert(start);
                self.standalone.insert(end);
                return Err(BridgeError::Blocked {
                    kind: placement.kind,
                    cell: placement.cell,
                });
            }
            let kind = ObjectKind::Segment(placement.kind);
            let id = services
                .factory
                .spawn(kind, placement.cell, placement.orientation);
            let object = PlacedObject::new(id, kind, placement.cell, footprint);
            services.registry.register(object);
            services.listener.placed(&object);
            match placement.kind {
                SegmentKind::Middle => middles.push(id),
                SegmentKind::Filler => fillers.push(id),
                SegmentKind::Start | SegmentKind::End => {}
            }
            placed.push(id);
        }

        let bridge = Bridge::new(
            BridgeId::next(),
            start,
            end,
            start_obj.anchor,
            end_obj.anchor,
            middles,
            fillers,
        );
        let bridge_id = bridge.id();
        for member in bridge.segments() {
            self.membership.insert(member, bridge_id);
        }
        services.listener.bridge_formed(&bridge);
        self.bridges.insert(bridge_id, bridge);
        Ok(bridge_id)
    }

    /// Dissolve a bridge.
    ///
    /// With `keep_endpoints`, Start and End are detached and return to
    /// the standalone set while remaining registered on the grid;
    /// without it they are unregistered and despawned too. Middle and
    /// Filler members never survive a break. Returns `false` when the
    /// id names no active bridge.
    pub fn break_bridge<F: SegmentFactory, L: WorldListener>(
        &mut self,
        id: BridgeId,
        keep_endpoints: bool,
        services: &mut WorldServices<'_, F, L>,
    ) -> bool {
        let Some(bridge) = self.bridges.shift_remove(&id) else {
            return false;
        };
        for member in bridge.segments() {
            self.membership.shift_remove(&member);
        }
        if keep_endpoints {
            self.standalone.insert(bridge.start());
            self.standalone.insert(bridge.end());
        } else {
            for endpoint in [bridge.start(), bridge.end()] {
                destroy(endpoint, services);
            }
        }
        for &member in bridge.middles().iter().chain(bridge.fillers()) {
            destroy(member, services);
        }
        services.listener.bridge_broken(&bridge, keep_endpoints);
        true
    }

    // ── Queries ─────────────────────────────────────────────────

    /// The active bridge with this id.
    pub fn bridge(&self, id: BridgeId) -> Option<&Bridge> {
        self.bridges.get(&id)
    }

    /// The bridge a segment belongs to, if any.
    pub fn bridge_for_segment(&self, id: ObjectId) -> Option<&Bridge> {
        self.membership.get(&id).and_then(|b| self.bridges.get(b))
    }

    /// All active bridges, oldest first.
    pub fn bridges(&self) -> impl Iterator<Item = &Bridge> {
        self.bridges.values()
    }

    /// Number of active bridges.
    pub fn bridge_count(&self) -> usize {
        self.bridges.len()
    }

    /// Standalone endpoints in insertion order.
    pub fn standalone(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.standalone.iter().copied()
    }

    /// `true` if the segment is placed but not part of any bridge.
    pub fn is_standalone(&self, id: ObjectId) -> bool {
        self.standalone.contains(&id)
    }

    /// Drop all tracking state. Used on scene reset.
    pub fn clear(&mut self) {
        self.standalone.clear();
        self.bridges.clear();
        self.membership.clear();
    }
}

/// The endpoint segment kind of an object, or the matching error.
fn endpoint_kind(object: &PlacedObject) -> Result<SegmentKind, BridgeError> {
    match object.kind.segment_kind() {
        Some(kind) if kind.is_endpoint() => Ok(kind),
        _ => Err(BridgeError::NotAnEndpoint {
            id: object.id,
            kind: object.kind,
        }),
    }
}

/// Unregister and despawn everything placed so far in a failed
/// construction attempt, newest first.
fn roll_back<F: SegmentFactory, L: WorldListener>(
    placed: &[ObjectId],
    services: &mut WorldServices<'_, F, L>,
) {
    for &id in placed.iter().rev() {
        destroy(id, services);
    }
}

/// Unregister an object and despawn its instance, notifying the
/// listener if it was still on the grid.
fn destroy<F: SegmentFactory, L: WorldListener>(
    id: ObjectId,
    services: &mut WorldServices<'_, F, L>,
) {
    if let Some(object) = services.registry.get(id).copied() {
        services.registry.unregister(id);
        services.listener.removed(&object);
    }
    services.factory.despawn(id);
}
