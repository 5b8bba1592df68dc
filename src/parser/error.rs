//! Parse errors for raw command input.

use thiserror::Error;

/// Errors that can occur when parsing a line of user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("'{0}' is not a valid command verb. Type HELP for the command list")]
    UnknownVerb(String),

    #[error("The verb '{verb}' does not take parameters")]
    UnexpectedArgs { verb: &'static str },

    #[error("The verb '{verb}' requires {expected} comma-separated parameters")]
    MissingArgs { verb: &'static str, expected: usize },

    #[error(
        "Wrong number of comma-separated parameters for '{verb}' (found {found}, expected {expected})"
    )]
    WrongArgCount {
        verb: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("'{0}' is not a valid coordinate. X and Y must be whole numbers")]
    InvalidCoordinate(String),

    #[error("'{0}' is not a valid facing. Choose NORTH, SOUTH, EAST or WEST")]
    InvalidFacing(String),
}
