//! Test utilities and mock collaborators for Trestle development.
//!
//! Provides mock implementations of the assembly seams
//! ([`SegmentFactory`], [`WorldListener`]) plus catalog fixtures for
//! common piece geometries.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use indexmap::IndexMap;
use trestle_assembly::{Bridge, SegmentFactory, WorldListener};
use trestle_core::{BridgeId, Cell, Footprint, ObjectId, ObjectKind, Orientation, PlacedObject};
use trestle_planner::{SegmentCatalog, SegmentSpec};

// ── Catalog fixtures ───────────────────────────────────────────

/// Catalog where every kind is a single cell: a plank bridge.
pub fn unit_catalog() -> SegmentCatalog {
    SegmentCatalog::uniform(Footprint::UNIT)
}

/// Catalog with the given piece extents along X (1 cell deep and tall).
pub fn linear_catalog(start: u32, middle: u32, filler: u32, end: u32) -> SegmentCatalog {
    let spec = |w| SegmentSpec::new(Footprint::from_size(w, 1, 1).expect("nonzero width"));
    SegmentCatalog::new(spec(start), spec(middle), spec(filler), spec(end))
}

// ── MockFactory ────────────────────────────────────────────────

/// What a [`MockFactory`] spawned, and with which arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnRecord {
    pub kind: ObjectKind,
    pub cell: Cell,
    pub orientation: Orientation,
    pub alive: bool,
}

/// Mock implementation of [`SegmentFactory`].
///
/// Allocates real [`ObjectId`]s and records every spawn and despawn so
/// tests can assert on instance lifecycles. `despawn` is idempotent,
/// as the trait contract requires.
#[derive(Debug, Default)]
pub struct MockFactory {
    spawned: IndexMap<ObjectId, SpawnRecord>,
}

impl MockFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every spawn this factory has performed, in order.
    pub fn records(&self) -> impl Iterator<Item = (ObjectId, &SpawnRecord)> {
        self.spawned.iter().map(|(id, record)| (*id, record))
    }

    /// The record for one id, if this factory spawned it.
    pub fn record(&self, id: ObjectId) -> Option<&SpawnRecord> {
        self.spawned.get(&id)
    }

    /// Number of instances spawned and not yet despawned.
    pub fn live_count(&self) -> usize {
        self.spawned.values().filter(|r| r.alive).count()
    }

    /// `true` if the id was spawned here and is still alive.
    pub fn is_live(&self, id: ObjectId) -> bool {
        self.spawned.get(&id).is_some_and(|r| r.alive)
    }
}

impl SegmentFactory for MockFactory {
    fn spawn(&mut self, kind: ObjectKind, cell: Cell, orientation: Orientation) -> ObjectId {
        let id = ObjectId::next();
        self.spawned.insert(
            id,
            SpawnRecord {
                kind,
                cell,
                orientation,
                alive: true,
            },
        );
        id
    }

    fn despawn(&mut self, id: ObjectId) {
        if let Some(record) = self.spawned.get_mut(&id) {
            record.alive = false;
        }
    }
}

// ── RecordingListener ──────────────────────────────────────────

/// One notification a [`RecordingListener`] received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Placed {
        id: ObjectId,
        kind: ObjectKind,
        cell: Cell,
    },
    Removed {
        id: ObjectId,
        kind: ObjectKind,
        cell: Cell,
    },
    BridgeFormed {
        id: BridgeId,
        members: usize,
    },
    BridgeBroken {
        id: BridgeId,
        endpoints_kept: bool,
    },
}

/// Mock implementation of [`WorldListener`] recording every
/// notification in arrival order.
#[derive(Debug, Default)]
pub struct RecordingListener {
    pub events: Vec<Event>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_placed(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Placed { .. }))
            .count()
    }

    pub fn count_removed(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Removed { .. }))
            .count()
    }
}

impl WorldListener for RecordingListener {
    fn placed(&mut self, object: &PlacedObject) {
        self.events.push(Event::Placed {
            id: object.id,
            kind: object.kind,
            cell: object.anchor,
        });
    }

    fn removed(&mut self, object: &PlacedObject) {
        self.events.push(Event::Removed {
            id: object.id,
            kind: object.kind,
            cell: object.anchor,
        });
    }

    fn bridge_formed(&mut self, bridge: &Bridge) {
        self.events.push(Event::BridgeFormed {
            id: bridge.id(),
            members: bridge.len(),
        });
    }

    fn bridge_broken(&mut self, bridge: &Bridge, endpoints_kept: bool) {
        self.events.push(Event::BridgeBroken {
            id: bridge.id(),
            endpoints_kept,
        });
    }
}
