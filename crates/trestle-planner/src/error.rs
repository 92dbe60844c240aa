//! Error types for bridge planning.

use std::error::Error;
use std::fmt;
use trestle_core::Cell;

/// Errors arising from bridge planning.
///
/// An `Err` from [`plan_bridge`](crate::plan_bridge) is the "plan
/// invalid, no placements" outcome: infeasible geometry is an expected
/// result of interactive placement, not a fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanError {
    /// The endpoint anchors do not lie on a pure axis-aligned straight
    /// line: the displacement is non-zero along zero, two, or three axes.
    NotStraightLine {
        /// The offending end-minus-start displacement.
        delta: Cell,
    },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStraightLine { delta } => {
                write!(
                    f,
                    "endpoints must differ along exactly one axis, displacement is {delta}"
                )
            }
        }
    }
}

impl Error for PlanError {}
