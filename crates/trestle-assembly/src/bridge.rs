//! The logical bridge grouping.

use trestle_core::{BridgeId, Cell, ObjectId};

/// A completed bridge: one Start, one End, and the Middle/Filler members
/// connecting them in a straight line along one axis.
///
/// A bridge exists only while every member remains registered on the
/// grid; the assembly layer dissolves it when any single member is
/// removed. Members are stored by id — the registry holds their records
/// and the host application holds their instances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bridge {
    id: BridgeId,
    start: ObjectId,
    end: ObjectId,
    start_anchor: Cell,
    end_anchor: Cell,
    middles: Vec<ObjectId>,
    fillers: Vec<ObjectId>,
}

impl Bridge {
    pub(crate) fn new(
        id: BridgeId,
        start: ObjectId,
        end: ObjectId,
        start_anchor: Cell,
        end_anchor: Cell,
        middles: Vec<ObjectId>,
        fillers: Vec<ObjectId>,
    ) -> Self {
        Self {
            id,
            start,
            end,
            start_anchor,
            end_anchor,
            middles,
            fillers,
        }
    }

    /// Unique identity of this bridge.
    pub fn id(&self) -> BridgeId {
        self.id
    }

    /// The Start segment.
    pub fn start(&self) -> ObjectId {
        self.start
    }

    /// The End segment.
    pub fn end(&self) -> ObjectId {
        self.end
    }

    /// Anchor cell of the Start segment.
    pub fn start_anchor(&self) -> Cell {
        self.start_anchor
    }

    /// Anchor cell of the End segment.
    pub fn end_anchor(&self) -> Cell {
        self.end_anchor
    }

    /// Middle members, in placement order.
    pub fn middles(&self) -> &[ObjectId] {
        &self.middles
    }

    /// Filler members, in placement order.
    pub fn fillers(&self) -> &[ObjectId] {
        &self.fillers
    }

    /// Every member in bridge order: Start, middles, fillers, End.
    pub fn segments(&self) -> impl Iterator<Item = ObjectId> + '_ {
        std::iter::once(self.start)
            .chain(self.middles.iter().copied())
            .chain(self.fillers.iter().copied())
            .chain(std::iter::once(self.end))
    }

    /// Total member count, endpoints included.
    pub fn len(&self) -> usize {
        self.middles.len() + self.fillers.len() + 2
    }

    /// Always `false`: a bridge has at least its two endpoints.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `true` if `id` is a member of this bridge.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.start == id
            || self.end == id
            || self.middles.contains(&id)
            || self.fillers.contains(&id)
    }
}
