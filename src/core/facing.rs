//! Compass facings and the rotation cycle.
//!
//! Rotation is expressed as index arithmetic over a fixed ordered cycle
//! rather than a chain of conditionals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four cardinal directions the robot can face.
///
/// # Example
///
/// ```rust
/// use toybot::core::Facing;
///
/// assert_eq!(Facing::North.left(), Facing::West);
/// assert_eq!(Facing::North.right(), Facing::East);
/// assert_eq!(Facing::East.step(), (1, 0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Facing {
    North,
    East,
    South,
    West,
}

/// Counter-clockwise rotation order: each entry is followed by the facing
/// 90 degrees to its left.
const CYCLE: [Facing; 4] = [Facing::North, Facing::West, Facing::South, Facing::East];

impl Facing {
    fn cycle_index(self) -> usize {
        match self {
            Self::North => 0,
            Self::West => 1,
            Self::South => 2,
            Self::East => 3,
        }
    }

    /// The facing after a 90 degree counter-clockwise turn.
    ///
    /// Four turns return to the starting facing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use toybot::core::Facing;
    ///
    /// assert_eq!(Facing::North.left(), Facing::West);
    /// assert_eq!(Facing::West.left(), Facing::South);
    /// ```
    pub fn left(self) -> Self {
        CYCLE[(self.cycle_index() + 1) % CYCLE.len()]
    }

    /// The facing after a 90 degree clockwise turn.
    ///
    /// Inverse of [`Facing::left`]: the same cycle walked backwards.
    ///
    /// # Example
    ///
    /// ```rust
    /// use toybot::core::Facing;
    ///
    /// assert_eq!(Facing::North.right(), Facing::East);
    /// assert_eq!(Facing::East.right(), Facing::South);
    /// ```
    pub fn right(self) -> Self {
        CYCLE[(self.cycle_index() + CYCLE.len() - 1) % CYCLE.len()]
    }

    /// Unit offset `(dx, dy)` for one step forward in this facing.
    ///
    /// The X-axis points EAST, the Y-axis points NORTH.
    pub fn step(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// Uppercase compass word for display and reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }

    /// Single-character map indicator pointing in this facing.
    pub fn glyph(self) -> char {
        match self {
            Self::North => '^',
            Self::East => '>',
            Self::South => 'v',
            Self::West => '<',
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
