//! The authoritative cell-occupancy registry.

use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;
use trestle_core::{Cell, Footprint, ObjectId, ObjectKind, PlacedObject};

/// Authoritative answer to "what occupies cell C" and "can O be placed
/// at P", with typed enumeration.
///
/// Three indices back the registry, all insertion-ordered so iteration
/// is deterministic:
///
/// - cell → occupying object id (occupancy truth),
/// - kind → set of object ids (typed secondary index),
/// - object id → the record captured at registration time.
///
/// # Overlap tolerance
///
/// Registration claims each footprint cell only if it is free: the first
/// claimant of a cell wins and a later overlapping registration skips
/// that cell rather than erroring. Unregistration frees every cell of
/// the footprint recorded at registration time unconditionally. Both
/// policies tolerate overlapping multi-cell registrations without ever
/// corrupting the map, at the cost of stale reads on improperly shared
/// cells — callers that need exclusion must check
/// [`can_place`](Self::can_place) first.
///
/// # Failure semantics
///
/// Every operation is a defensive no-op on redundant or unknown input
/// (double-register, double-unregister, queries on untracked ids).
/// Callers may unregister unconditionally during teardown.
///
/// # Examples
///
/// ```
/// use trestle_core::{Cell, Footprint, ObjectId, ObjectKind, PlacedObject};
/// use trestle_grid::SpatialRegistry;
///
/// let mut registry = SpatialRegistry::new();
/// let crate_id = ObjectId::next();
/// registry.register(PlacedObject::new(
///     crate_id,
///     ObjectKind::Prop,
///     Cell::new(3, 0, 3),
///     Footprint::from_size(2, 1, 2).unwrap(),
/// ));
///
/// assert!(registry.is_cell_occupied(Cell::new(4, 0, 3)));
/// assert!(!registry.can_place(Cell::new(3, 0, 3), &Footprint::UNIT, None));
/// // The occupant itself can be ignored while dragging it to a new spot.
/// assert!(registry.can_place(Cell::new(3, 0, 3), &Footprint::UNIT, Some(crate_id)));
/// ```
#[derive(Debug, Default)]
pub struct SpatialRegistry {
    cells: IndexMap<Cell, ObjectId>,
    by_kind: IndexMap<ObjectKind, IndexSet<ObjectId>>,
    objects: IndexMap<ObjectId, PlacedObject>,
}

impl SpatialRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ────────────────────────────────────────────────

    /// Track an object and claim its footprint cells.
    ///
    /// No-op if the object's id is already tracked. Cells already claimed
    /// by a different object are skipped (first claim wins).
    pub fn register(&mut self, object: PlacedObject) {
        if self.objects.contains_key(&object.id) {
            return;
        }
        for cell in object.cells() {
            self.cells.entry(cell).or_insert(object.id);
        }
        self.by_kind.entry(object.kind).or_default().insert(object.id);
        self.objects.insert(object.id, object);
    }

    /// Stop tracking an object and free its footprint cells.
    ///
    /// No-op if the id is untracked. Frees every cell of the footprint
    /// recorded at registration time, trusting that record over the
    /// current per-cell claimants.
    pub fn unregister(&mut self, id: ObjectId) {
        let Some(object) = self.objects.shift_remove(&id) else {
            return;
        };
        for cell in object.cells() {
            self.cells.shift_remove(&cell);
        }
        if let Some(set) = self.by_kind.get_mut(&object.kind) {
            set.shift_remove(&id);
        }
    }

    /// Drop all three indices. Used on scene reset.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.by_kind.clear();
        self.objects.clear();
    }

    // ── Occupancy queries ───────────────────────────────────────

    /// `true` if any object claims `cell`. O(1).
    pub fn is_cell_occupied(&self, cell: Cell) -> bool {
        self.cells.contains_key(&cell)
    }

    /// The object claiming `cell`, if any.
    pub fn object_at(&self, cell: Cell) -> Option<&PlacedObject> {
        self.cells.get(&cell).and_then(|id| self.objects.get(id))
    }

    /// `true` iff every cell of `footprint` anchored at `anchor` is
    /// either unoccupied or claimed by `ignore`.
    ///
    /// `ignore` allows re-placement checks for an object being dragged:
    /// its previously claimed cells do not block its own new position.
    pub fn can_place(&self, anchor: Cell, footprint: &Footprint, ignore: Option<ObjectId>) -> bool {
        footprint
            .absolute_cells(anchor)
            .all(|cell| match self.cells.get(&cell) {
                None => true,
                Some(&occupant) => Some(occupant) == ignore,
            })
    }

    // ── Object queries ──────────────────────────────────────────

    /// `true` if the id is tracked.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// The record captured when `id` was registered.
    pub fn get(&self, id: ObjectId) -> Option<&PlacedObject> {
        self.objects.get(&id)
    }

    /// Cells currently claimed by `id`.
    ///
    /// Usually the whole recorded footprint; fewer when an earlier
    /// overlapping registration won some cells. Inline storage covers
    /// typical piece sizes without allocating.
    pub fn claimed_cells(&self, id: ObjectId) -> SmallVec<[Cell; 8]> {
        match self.objects.get(&id) {
            Some(object) => object
                .cells()
                .filter(|cell| self.cells.get(cell) == Some(&id))
                .collect(),
            None => SmallVec::new(),
        }
    }

    /// Number of tracked objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// `true` when nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// All tracked objects in registration order.
    pub fn objects(&self) -> impl Iterator<Item = &PlacedObject> {
        self.objects.values()
    }

    /// Lazy iteration over objects of one kind, in registration order.
    pub fn objects_of_kind(&self, kind: ObjectKind) -> impl Iterator<Item = &PlacedObject> {
        self.by_kind
            .get(&kind)
            .into_iter()
            .flatten()
            .filter_map(|id| self.objects.get(id))
    }

    /// Objects with at least one claimed cell within the cube of the
    /// given radius around `center`, deduplicated.
    ///
    /// Brute-force scan of the `(2r+1)^3` candidate cells. Radius is
    /// bounded by game design, not data size, so no broader spatial
    /// index is kept.
    pub fn objects_in_radius(&self, center: Cell, radius: u32) -> Vec<&PlacedObject> {
        let r = radius as i32;
        let mut seen: IndexSet<ObjectId> = IndexSet::new();
        let mut results = Vec::new();
        for dx in -r..=r {
            for dy in -r..=r {
                for dz in -r..=r {
                    let probe = center + Cell::new(dx, dy, dz);
                    if let Some(&id) = self.cells.get(&probe) {
                        if seen.insert(id) {
                            if let Some(object) = self.objects.get(&id) {
                                results.push(object);
                            }
                        }
                    }
                }
            }
        }
        results
    }
}
