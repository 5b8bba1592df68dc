//! Toybot: a toy robot simulator on a bounded tabletop.
//!
//! Toybot is built on a "pure core, imperative shell" philosophy. The robot
//! state machine is composed of pure functions with no side effects: every
//! operation consumes the current state value and returns the next one, so
//! the caller owns the single source of truth and no global instance exists.
//! Parsing, rendering and the interactive loop live in the shell modules
//! around the core.
//!
//! # Core Concepts
//!
//! - **Robot**: the state machine, either `Unplaced` or `Placed` with a pose
//! - **Commands**: typed tokens (PLACE, MOVE, LEFT, RIGHT, REPORT) the shell
//!   hands to the core after parsing raw input
//! - **History**: immutable tracking of executed commands over a session
//!
//! The tabletop is a 5x5 grid with coordinates 0-4 on each axis. Commands
//! that would carry the robot off the table are absorbed as no-ops: the
//! prior state is retained and nothing fails loudly.
//!
//! # Example
//!
//! ```rust
//! use toybot::core::{Facing, Position, Robot};
//!
//! let robot = Robot::new();
//! let robot = robot.place(Position::new(0, 0), Facing::North);
//! let robot = robot.advance();
//!
//! let pose = robot.report().unwrap();
//! assert_eq!((pose.position.x, pose.position.y), (0, 1));
//! assert_eq!(pose.facing, Facing::North);
//! ```

pub mod core;
pub mod parser;
pub mod render;
pub mod repl;

// Re-export commonly used types
pub use core::{Command, Facing, Outcome, Pose, Position, Robot, SessionHistory};
