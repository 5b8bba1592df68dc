//! Translation from raw input lines to typed commands.
//!
//! The grammar is line-oriented: a line is either `VERB` or `VERB ARGS`
//! separated by a single space, with `ARGS` comma-separated. Only PLACE
//! takes arguments. Verbs are uppercase and matched exactly, so
//! `PLACE1,2,EAST` is an unknown verb and `PLACE 1 2 EAST` has the wrong
//! parameter count. All string handling stops here; the core only ever
//! sees typed values.

mod error;

pub use error::ParseError;

use crate::core::{Command, Facing, Position};

/// A parsed line of user input.
///
/// `Help` and `Exit` are interface concerns and never reach the robot
/// state machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Input {
    /// A command for the robot state machine.
    Robot(Command),
    /// Print the command reference.
    Help,
    /// End the session.
    Exit,
    /// Blank line; nothing to do.
    Empty,
}

/// Parse one line of user input.
///
/// # Example
///
/// ```rust
/// use toybot::core::{Command, Facing, Position};
/// use toybot::parser::{parse_line, Input};
///
/// let input = parse_line("PLACE 1,2,EAST").unwrap();
/// assert_eq!(
///     input,
///     Input::Robot(Command::Place {
///         position: Position::new(1, 2),
///         facing: Facing::East,
///     })
/// );
///
/// assert!(parse_line("PLACE 1 2 EAST").is_err());
/// assert!(parse_line("hop").is_err());
/// ```
pub fn parse_line(line: &str) -> Result<Input, ParseError> {
    let line = line.trim_end_matches(|c| c == '\r' || c == '\n');
    if line.trim().is_empty() {
        return Ok(Input::Empty);
    }

    let (verb, args) = match line.split_once(' ') {
        Some((verb, rest)) => (verb, Some(rest)),
        None => (line, None),
    };

    match verb {
        "PLACE" => {
            let args = args.ok_or(ParseError::MissingArgs {
                verb: "PLACE",
                expected: 3,
            })?;
            parse_place(args).map(Input::Robot)
        }
        "MOVE" => bare("MOVE", args, Input::Robot(Command::Move)),
        "LEFT" => bare("LEFT", args, Input::Robot(Command::Left)),
        "RIGHT" => bare("RIGHT", args, Input::Robot(Command::Right)),
        "REPORT" => bare("REPORT", args, Input::Robot(Command::Report)),
        "HELP" => bare("HELP", args, Input::Help),
        "EXIT" => bare("EXIT", args, Input::Exit),
        other => Err(ParseError::UnknownVerb(other.to_string())),
    }
}

/// Accept a verb that takes no parameters.
fn bare(verb: &'static str, args: Option<&str>, input: Input) -> Result<Input, ParseError> {
    match args {
        Some(_) => Err(ParseError::UnexpectedArgs { verb }),
        None => Ok(input),
    }
}

fn parse_place(args: &str) -> Result<Command, ParseError> {
    let parts: Vec<&str> = args.split(',').collect();
    if parts.len() != 3 {
        return Err(ParseError::WrongArgCount {
            verb: "PLACE",
            expected: 3,
            found: parts.len(),
        });
    }

    let x = parse_coordinate(parts[0])?;
    let y = parse_coordinate(parts[1])?;
    let facing = parse_facing(parts[2])?;

    Ok(Command::Place {
        position: Position::new(x, y),
        facing,
    })
}

fn parse_coordinate(raw: &str) -> Result<i32, ParseError> {
    raw.parse()
        .map_err(|_| ParseError::InvalidCoordinate(raw.to_string()))
}

fn parse_facing(raw: &str) -> Result<Facing, ParseError> {
    match raw {
        "NORTH" => Ok(Facing::North),
        "SOUTH" => Ok(Facing::South),
        "EAST" => Ok(Facing::East),
        "WEST" => Ok(Facing::West),
        other => Err(ParseError::InvalidFacing(other.to_string())),
    }
}
