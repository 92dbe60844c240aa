//! Segment orientations: quarter-turn yaws derived from travel direction.

use crate::cell::{Axis, Direction};
use std::fmt;

/// Yaw correction applied on top of the look rotation, in degrees.
///
/// Segment models are authored facing the grid X axis rather than the
/// logical forward (Z) axis, so every placement is yawed back by 90°.
const MODEL_YAW_CORRECTION: i32 = -90;

/// The yaw a segment model is placed with, in quarter turns about the
/// vertical axis.
///
/// [`Orientation::for_direction`] is the single authority mapping a travel
/// direction to a yaw; Start, Middle, Filler, and End placements of one
/// plan all receive the same value, so adjacent pieces always line up.
///
/// # Examples
///
/// ```
/// use trestle_core::{Axis, Direction, Orientation};
///
/// let east = Direction::new(Axis::X, true);
/// let west = Direction::new(Axis::X, false);
/// assert_eq!(Orientation::for_direction(east), Orientation::Yaw0);
/// assert_eq!(Orientation::for_direction(west), Orientation::Yaw180);
/// assert_eq!(Orientation::Yaw270.degrees(), 270);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// No yaw.
    #[default]
    Yaw0,
    /// Quarter turn.
    Yaw90,
    /// Half turn.
    Yaw180,
    /// Three-quarter turn.
    Yaw270,
}

impl Orientation {
    /// Yaw in degrees, in `{0, 90, 180, 270}`.
    pub const fn degrees(self) -> u32 {
        match self {
            Self::Yaw0 => 0,
            Self::Yaw90 => 90,
            Self::Yaw180 => 180,
            Self::Yaw270 => 270,
        }
    }

    /// The orientation for a segment traveling along `direction`.
    ///
    /// Look yaw (forward = +Z, clockwise seen from above: +Z → 0°,
    /// +X → 90°, −Z → 180°, −X → 270°) composed with the fixed model
    /// correction. Vertical travel has no horizontal forward, so ±Y take
    /// the correction alone.
    pub fn for_direction(direction: Direction) -> Orientation {
        let look = match (direction.axis(), direction.is_positive()) {
            (Axis::Z, true) => 0,
            (Axis::X, true) => 90,
            (Axis::Z, false) => 180,
            (Axis::X, false) => 270,
            (Axis::Y, _) => 0,
        };
        Self::from_degrees(look + MODEL_YAW_CORRECTION)
    }

    /// Normalize a degree count (any multiple of 90) into a quarter turn.
    const fn from_degrees(degrees: i32) -> Orientation {
        match degrees.rem_euclid(360) {
            0 => Self::Yaw0,
            90 => Self::Yaw90,
            180 => Self::Yaw180,
            _ => Self::Yaw270,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "yaw {}", self.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_directions_map_to_distinct_yaws() {
        let cases = [
            (Direction::new(Axis::X, true), Orientation::Yaw0),
            (Direction::new(Axis::Z, false), Orientation::Yaw90),
            (Direction::new(Axis::X, false), Orientation::Yaw180),
            (Direction::new(Axis::Z, true), Orientation::Yaw270),
        ];
        for (direction, expected) in cases {
            assert_eq!(Orientation::for_direction(direction), expected, "{direction}");
        }
    }

    #[test]
    fn vertical_directions_share_the_correction_yaw() {
        let up = Orientation::for_direction(Direction::new(Axis::Y, true));
        let down = Orientation::for_direction(Direction::new(Axis::Y, false));
        assert_eq!(up, Orientation::Yaw270);
        assert_eq!(down, Orientation::Yaw270);
    }

    #[test]
    fn same_direction_always_same_orientation() {
        let d = Direction::new(Axis::Z, true);
        assert_eq!(
            Orientation::for_direction(d),
            Orientation::for_direction(d)
        );
    }
}
