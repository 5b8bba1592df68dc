//! Session history of executed commands.
//!
//! Provides immutable tracking of robot state transitions over time,
//! following functional programming principles. The history lives in
//! memory for the duration of a session and is discarded at process end.

use super::command::Command;
use super::robot::Robot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single executed command.
///
/// Records are immutable values capturing the states around one command
/// at a specific point in time.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use toybot::core::{Command, CommandRecord, Facing, Position, Robot};
///
/// let before = Robot::new();
/// let after = before.place(Position::new(0, 0), Facing::North);
///
/// let record = CommandRecord {
///     command: Command::Place {
///         position: Position::new(0, 0),
///         facing: Facing::North,
///     },
///     from: before,
///     to: after,
///     timestamp: Utc::now(),
/// };
/// assert!(!record.is_noop());
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The command that was executed
    pub command: Command,
    /// The state before execution
    pub from: Robot,
    /// The state after execution
    pub to: Robot,
    /// When the command executed
    pub timestamp: DateTime<Utc>,
}

impl CommandRecord {
    /// Whether the command left the state untouched.
    ///
    /// True for rejected placements and moves, for movement commands on an
    /// unplaced robot, and for REPORT (which never mutates).
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of executed commands.
///
/// History is immutable - the `record` method returns a new history with
/// the record added, following functional programming principles.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use toybot::core::{Command, CommandRecord, Facing, Position, Robot, SessionHistory};
///
/// let history = SessionHistory::new();
///
/// let before = Robot::new();
/// let after = before.place(Position::new(1, 2), Facing::East);
/// let history = history.record(CommandRecord {
///     command: Command::Place {
///         position: Position::new(1, 2),
///         facing: Facing::East,
///     },
///     from: before,
///     to: after,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.path().len(), 2); // Unplaced -> Placed
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionHistory {
    records: Vec<CommandRecord>,
}

impl SessionHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record an executed command, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the record added.
    pub fn record(&self, record: CommandRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// The sequence of states traversed: the initial state, then the `to`
    /// state of each record.
    pub fn path(&self) -> Vec<&Robot> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Total duration from the first to the last record.
    ///
    /// Returns `None` when the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All records in execution order.
    pub fn records(&self) -> &[CommandRecord] {
        &self.records
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no commands have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
