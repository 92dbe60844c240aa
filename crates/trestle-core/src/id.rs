//! Strongly-typed identifiers for placed objects and bridges.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`ObjectId`] allocation.
static OBJECT_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Counter for unique [`BridgeId`] allocation.
static BRIDGE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identity of one placed object.
///
/// Allocated from a monotonic atomic counter via [`ObjectId::next`]; ids
/// are never reused within a process, so a stale id held across removal
/// can never alias a newer object. This replaces reference identity: the
/// registry and assembly layers track objects by id, while the host
/// application owns whatever instance the id names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Allocate a fresh, unique object id. Thread-safe.
    pub fn next() -> Self {
        Self(OBJECT_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object#{}", self.0)
    }
}

/// Unique identity of one assembled bridge.
///
/// Allocated from a monotonic atomic counter via [`BridgeId::next`];
/// never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BridgeId(u64);

impl BridgeId {
    /// Allocate a fresh, unique bridge id. Thread-safe.
    pub fn next() -> Self {
        Self(BRIDGE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for BridgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bridge#{}", self.0)
    }
}
