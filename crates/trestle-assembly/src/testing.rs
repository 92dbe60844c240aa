//! Shared fixtures for the in-crate test modules.

use crate::tracker::WorldServices;
use crate::traits::SegmentFactory;
use indexmap::IndexSet;
use trestle_core::{Cell, Footprint, ObjectId, ObjectKind, Orientation, PlacedObject};
use trestle_grid::SpatialRegistry;
use trestle_planner::SegmentCatalog;

/// Catalog where every kind is a single cell.
pub(crate) fn unit_catalog() -> SegmentCatalog {
    SegmentCatalog::uniform(Footprint::UNIT)
}

/// Factory that only tracks which ids are alive.
#[derive(Debug, Default)]
pub(crate) struct CountingFactory {
    live: IndexSet<ObjectId>,
}

impl CountingFactory {
    pub(crate) fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl SegmentFactory for CountingFactory {
    fn spawn(&mut self, _kind: ObjectKind, _cell: Cell, _orientation: Orientation) -> ObjectId {
        let id = ObjectId::next();
        self.live.insert(id);
        id
    }

    fn despawn(&mut self, id: ObjectId) {
        self.live.shift_remove(&id);
    }
}

/// Registry + factory + null listener, bundled the way tests use them.
#[derive(Debug, Default)]
pub(crate) struct Host {
    pub registry: SpatialRegistry,
    pub factory: CountingFactory,
    pub listener: (),
}

impl Host {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn services<'a>(
        &'a mut self,
        catalog: &'a SegmentCatalog,
    ) -> WorldServices<'a, CountingFactory, ()> {
        WorldServices {
            registry: &mut self.registry,
            catalog,
            factory: &mut self.factory,
            listener: &mut self.listener,
        }
    }

    /// Spawn an instance and register it at `anchor`, bypassing any
    /// occupancy check.
    pub(crate) fn spawn_registered(
        &mut self,
        kind: ObjectKind,
        anchor: Cell,
        footprint: Footprint,
    ) -> ObjectId {
        let id = self.factory.spawn(kind, anchor, Orientation::default());
        self.registry
            .register(PlacedObject::new(id, kind, anchor, footprint));
        id
    }
}
