//! Typed commands and the dispatch point for executing them.
//!
//! The surrounding interface translates raw input into these tokens; no
//! string parsing happens in the core. Execution is a pure transition
//! function of shape `(state, command) -> outcome`.

use super::facing::Facing;
use super::position::Position;
use super::robot::{Pose, Robot};
use serde::{Deserialize, Serialize};

/// A command token, already parsed into typed values.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Put the robot on the table at a position and facing.
    Place { position: Position, facing: Facing },
    /// Move one unit forward in the current facing.
    Move,
    /// Rotate 90 degrees counter-clockwise.
    Left,
    /// Rotate 90 degrees clockwise.
    Right,
    /// Read the current pose without mutating state.
    Report,
}

impl Command {
    /// Verb name for display and logging.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Place { .. } => "PLACE",
            Self::Move => "MOVE",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Report => "REPORT",
        }
    }
}

/// Result of executing a single command.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Outcome {
    /// The state after the command (equal to the prior state when the
    /// command was absorbed as a no-op).
    pub robot: Robot,
    /// The snapshot produced by REPORT; `None` for every other command and
    /// for REPORT on an unplaced robot.
    pub report: Option<Pose>,
}

impl Robot {
    /// Execute one command, returning the next state and any report.
    ///
    /// Every command either transitions to a new valid state or leaves the
    /// state untouched; no errors propagate from the core.
    ///
    /// # Example
    ///
    /// ```rust
    /// use toybot::core::{Command, Facing, Position, Robot};
    ///
    /// let outcome = Robot::new().execute(Command::Place {
    ///     position: Position::new(0, 0),
    ///     facing: Facing::North,
    /// });
    /// let outcome = outcome.robot.execute(Command::Report);
    ///
    /// assert_eq!(outcome.report.unwrap().position, Position::new(0, 0));
    /// ```
    pub fn execute(self, command: Command) -> Outcome {
        match command {
            Command::Place { position, facing } => Outcome {
                robot: self.place(position, facing),
                report: None,
            },
            Command::Move => Outcome {
                robot: self.advance(),
                report: None,
            },
            Command::Left => Outcome {
                robot: self.turn_left(),
                report: None,
            },
            Command::Right => Outcome {
                robot: self.turn_right(),
                report: None,
            },
            Command::Report => Outcome {
                report: self.report(),
                robot: self,
            },
        }
    }
}
