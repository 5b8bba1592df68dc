//! Boundary validation for the tabletop grid.

use super::position::Position;

/// The bounded grid of valid cells.
///
/// The tabletop is fixed at 5x5: coordinates 0-4 on each axis. The X-axis
/// points EAST and the Y-axis points NORTH, so `(0, 0)` is the south-west
/// corner.
///
/// # Example
///
/// ```rust
/// use toybot::core::{Position, Table};
///
/// assert!(Table::contains(Position::new(0, 0)));
/// assert!(Table::contains(Position::new(4, 4)));
/// assert!(!Table::contains(Position::new(5, 0)));
/// assert!(!Table::contains(Position::new(0, -1)));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Table;

impl Table {
    /// Number of cells along the X-axis.
    pub const WIDTH: i32 = 5;

    /// Number of cells along the Y-axis.
    pub const HEIGHT: i32 = 5;

    /// Check whether a position is a valid cell on the table.
    pub fn contains(position: Position) -> bool {
        (0..Self::WIDTH).contains(&position.x) && (0..Self::HEIGHT).contains(&position.y)
    }
}
