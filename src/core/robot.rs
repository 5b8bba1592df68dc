//! The robot state machine: placement, movement, rotation and reporting.

use super::facing::Facing;
use super::position::Position;
use super::table::Table;
use serde::{Deserialize, Serialize};

/// Snapshot of a placed robot: where it stands and where it points.
///
/// This is the structured value REPORT yields; it is read-only and never
/// fabricated for an unplaced robot.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Pose {
    pub position: Position,
    pub facing: Facing,
}

/// The robot state machine.
///
/// A robot starts `Unplaced`; the first valid PLACE moves it to `Placed`.
/// Every operation is pure: it consumes the current state and returns the
/// next one, so the caller owns the single source of truth and no hidden
/// global instance exists.
///
/// Whenever the robot is `Placed`, its position is a valid cell on the
/// table. Operations that would break this return the prior state
/// unchanged; nothing fails loudly.
///
/// # Example
///
/// ```rust
/// use toybot::core::{Facing, Position, Robot};
///
/// let robot = Robot::new()
///     .place(Position::new(1, 2), Facing::East)
///     .turn_left()
///     .advance();
///
/// let pose = robot.report().unwrap();
/// assert_eq!(pose.position, Position::new(1, 3));
/// assert_eq!(pose.facing, Facing::North);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Robot {
    /// Not yet on the table; movement and reporting are inert.
    #[default]
    Unplaced,
    /// On the table with a known pose.
    Placed(Pose),
}

impl Robot {
    /// Create a robot in the initial, unplaced state.
    pub fn new() -> Self {
        Self::Unplaced
    }

    /// Put the robot on the table at `position`, facing `facing`.
    ///
    /// A valid placement discards any prior state, including an earlier
    /// pose. An off-table position is absorbed as a no-op: the prior state
    /// (placed or unplaced) is retained.
    ///
    /// # Example
    ///
    /// ```rust
    /// use toybot::core::{Facing, Position, Robot};
    ///
    /// let robot = Robot::new().place(Position::new(5, 5), Facing::North);
    /// assert!(!robot.is_placed());
    ///
    /// let robot = robot.place(Position::new(3, 2), Facing::North);
    /// assert!(robot.is_placed());
    /// ```
    pub fn place(self, position: Position, facing: Facing) -> Self {
        if Table::contains(position) {
            Self::Placed(Pose { position, facing })
        } else {
            self
        }
    }

    /// Move one unit forward in the current facing.
    ///
    /// The move commits only if the forward cell is still on the table;
    /// at an edge the robot stays put rather than falling off. A no-op
    /// when unplaced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use toybot::core::{Facing, Position, Robot};
    ///
    /// let robot = Robot::new().place(Position::new(0, 0), Facing::South);
    /// let robot = robot.advance();
    ///
    /// // Rejected at the south edge; position unchanged.
    /// assert_eq!(robot.report().unwrap().position, Position::new(0, 0));
    /// ```
    pub fn advance(self) -> Self {
        match self {
            Self::Placed(pose) => {
                let ahead = pose.position.step(pose.facing);
                if Table::contains(ahead) {
                    Self::Placed(Pose {
                        position: ahead,
                        ..pose
                    })
                } else {
                    self
                }
            }
            Self::Unplaced => self,
        }
    }

    /// Rotate 90 degrees counter-clockwise without changing position.
    ///
    /// A no-op when unplaced.
    pub fn turn_left(self) -> Self {
        match self {
            Self::Placed(pose) => Self::Placed(Pose {
                facing: pose.facing.left(),
                ..pose
            }),
            Self::Unplaced => self,
        }
    }

    /// Rotate 90 degrees clockwise without changing position.
    ///
    /// A no-op when unplaced.
    pub fn turn_right(self) -> Self {
        match self {
            Self::Placed(pose) => Self::Placed(Pose {
                facing: pose.facing.right(),
                ..pose
            }),
            Self::Unplaced => self,
        }
    }

    /// The current pose, or `None` when the robot has not been placed.
    ///
    /// Never returns stale or fabricated coordinates; absence is explicit.
    /// Does not mutate state.
    pub fn report(&self) -> Option<Pose> {
        match self {
            Self::Placed(pose) => Some(*pose),
            Self::Unplaced => None,
        }
    }

    /// Check whether the robot is on the table.
    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed(_))
    }
}
