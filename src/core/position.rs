//! Grid coordinates on the tabletop.

use super::facing::Facing;
use serde::{Deserialize, Serialize};

/// A pair of integer grid coordinates.
///
/// Coordinates are signed so that candidate positions off the table (for
/// example `(-1, 7)`) can be represented and then rejected by boundary
/// validation, rather than wrapping or panicking on construction.
///
/// # Example
///
/// ```rust
/// use toybot::core::{Facing, Position};
///
/// let origin = Position::new(0, 0);
/// assert_eq!(origin.step(Facing::North), Position::new(0, 1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a position from raw coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit forward in the given facing.
    ///
    /// This is a pure computation; whether the result is a legal cell is
    /// decided separately by [`Table::contains`](super::Table::contains).
    pub fn step(self, facing: Facing) -> Self {
        let (dx, dy) = facing.step();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_one_unit_in_facing_direction() {
        let center = Position::new(2, 2);
        assert_eq!(center.step(Facing::North), Position::new(2, 3));
        assert_eq!(center.step(Facing::East), Position::new(3, 2));
        assert_eq!(center.step(Facing::South), Position::new(2, 1));
        assert_eq!(center.step(Facing::West), Position::new(1, 2));
    }

    #[test]
    fn step_can_leave_the_grid() {
        // Stepping produces the candidate cell; validation happens elsewhere.
        assert_eq!(Position::new(0, 0).step(Facing::South), Position::new(0, -1));
        assert_eq!(Position::new(4, 4).step(Facing::East), Position::new(5, 4));
    }

    #[test]
    fn step_then_opposite_step_returns_home() {
        let home = Position::new(1, 3);
        assert_eq!(home.step(Facing::North).step(Facing::South), home);
        assert_eq!(home.step(Facing::East).step(Facing::West), home);
    }
}
