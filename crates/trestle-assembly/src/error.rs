//! Error types for bridge assembly.

use std::error::Error;
use std::fmt;
use trestle_core::{BridgeId, Cell, ObjectId, ObjectKind, SegmentKind};
use trestle_planner::PlanError;

/// Errors from bridge creation.
///
/// All of these are expected outcomes of interactive play, not faults:
/// the assembly layer restores the standalone set before returning, so
/// a failed creation leaves no trace.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BridgeError {
    /// The planner rejected the endpoint geometry.
    Plan(PlanError),
    /// An endpoint id is not registered on the grid.
    UnknownSegment {
        /// The unregistered id.
        id: ObjectId,
    },
    /// An endpoint is not a Start or End segment.
    NotAnEndpoint {
        /// The offending id.
        id: ObjectId,
        /// Its actual kind.
        kind: ObjectKind,
    },
    /// Both endpoints are the same kind (two Starts or two Ends).
    EndpointsSameKind {
        /// The shared kind.
        kind: SegmentKind,
    },
    /// The same segment was passed as both endpoints.
    SameSegment {
        /// The repeated id.
        id: ObjectId,
    },
    /// An endpoint already belongs to a bridge.
    AlreadyBridged {
        /// The offending id.
        id: ObjectId,
        /// The bridge it belongs to.
        bridge: BridgeId,
    },
    /// An intermediate placement was blocked by an existing occupant;
    /// everything placed so far was rolled back.
    Blocked {
        /// The kind that could not be placed.
        kind: SegmentKind,
        /// The anchor cell that was blocked.
        cell: Cell,
    },
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plan(e) => write!(f, "plan: {e}"),
            Self::UnknownSegment { id } => write!(f, "{id} is not on the grid"),
            Self::NotAnEndpoint { id, kind } => {
                write!(f, "{id} is a {kind}, not a start or end segment")
            }
            Self::EndpointsSameKind { kind } => {
                write!(f, "both endpoints are {kind} segments")
            }
            Self::SameSegment { id } => {
                write!(f, "{id} was passed as both endpoints")
            }
            Self::AlreadyBridged { id, bridge } => {
                write!(f, "{id} already belongs to {bridge}")
            }
            Self::Blocked { kind, cell } => {
                write!(f, "{kind} segment blocked at {cell}; bridge rolled back")
            }
        }
    }
}

impl Error for BridgeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Plan(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PlanError> for BridgeError {
    fn from(e: PlanError) -> Self {
        Self::Plan(e)
    }
}
