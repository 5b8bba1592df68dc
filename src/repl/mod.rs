//! The interactive command loop.
//!
//! Owns the robot value for the lifetime of a session and threads it
//! through every executed command, recording each one in the session
//! history. All I/O happens here; the core never prints or logs.

use crate::core::{Command, CommandRecord, Robot, SessionHistory};
use crate::parser::{self, Input};
use crate::render;
use chrono::Utc;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Run the interactive loop until EXIT or end of input.
///
/// Reads line-oriented commands from `input` and writes prompts, reports
/// and the tabletop map to `output`. Returns the session history so the
/// caller can summarize the session.
pub fn run<R: BufRead, W: Write>(mut input: R, output: &mut W) -> std::io::Result<SessionHistory> {
    let mut robot = Robot::new();
    let mut history = SessionHistory::new();

    writeln!(output, "{}", render::help_text())?;
    write!(output, "{}", render::draw_map(&robot))?;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            info!("end of input");
            break;
        }

        match parser::parse_line(&line) {
            Ok(Input::Empty) => continue,
            Ok(Input::Help) => writeln!(output, "{}", render::help_text())?,
            Ok(Input::Exit) => {
                info!("session ended by user");
                break;
            }
            Ok(Input::Robot(command)) => {
                let outcome = robot.execute(command);
                history = history.record(CommandRecord {
                    command,
                    from: robot,
                    to: outcome.robot,
                    timestamp: Utc::now(),
                });

                if command == Command::Report {
                    match outcome.report {
                        Some(pose) => writeln!(output, "{}", render::report_line(pose))?,
                        None => {
                            warn!("REPORT before a valid PLACE");
                            writeln!(output, "{}", render::missing_report_line())?;
                        }
                    }
                } else {
                    if outcome.robot != robot {
                        debug!(verb = command.verb(), "executed");
                    } else if robot.is_placed() {
                        warn!(verb = command.verb(), "rejected: the robot stays on the table");
                        writeln!(output, "{}", render::help_text())?;
                    } else {
                        warn!(
                            verb = command.verb(),
                            "rejected: issue an in-bounds PLACE first"
                        );
                        writeln!(output, "{}", render::help_text())?;
                    }
                    robot = outcome.robot;
                    write!(output, "{}", render::draw_map(&robot))?;
                }
            }
            Err(err) => {
                warn!(%err, "invalid command");
                writeln!(output, "Invalid command: {err}")?;
                writeln!(output, "{}", render::help_text())?;
            }
        }
    }

    if let Some(elapsed) = history.duration() {
        info!(commands = history.len(), ?elapsed, "session complete");
    }

    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(script: &str) -> (SessionHistory, String) {
        let mut output = Vec::new();
        let history = run(Cursor::new(script), &mut output).unwrap();
        (history, String::from_utf8(output).unwrap())
    }

    #[test]
    fn session_executes_commands_and_reports() {
        let (history, output) = run_session("PLACE 1,2,EAST\nMOVE\nREPORT\nEXIT\n");

        assert_eq!(history.len(), 3);
        assert!(output.contains("2,2,EAST"));
    }

    #[test]
    fn report_before_place_prints_absence_message() {
        let (_, output) = run_session("REPORT\nEXIT\n");
        assert!(output.contains("No report available"));
    }

    #[test]
    fn invalid_input_keeps_the_session_alive() {
        let (history, output) = run_session("PLACE 1 2 EAST\nPLACE 3,4,WEST\nREPORT\nEXIT\n");

        assert!(output.contains("Invalid command"));
        assert!(output.contains("3,4,WEST"));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let (history, _) = run_session("PLACE 0,0,NORTH\n");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn rejected_move_redraws_unchanged_map() {
        let (history, output) = run_session("PLACE 4,4,EAST\nMOVE\nREPORT\nEXIT\n");

        assert!(output.contains("4,4,EAST"));
        assert!(history.records()[1].is_noop());
    }

    #[test]
    fn help_prints_the_command_reference() {
        let (history, output) = run_session("HELP\nEXIT\n");

        assert!(output.contains("Valid commands"));
        // HELP is an interface concern; it never reaches the robot.
        assert!(history.is_empty());
    }

    #[test]
    fn blank_lines_are_ignored() {
        let (history, _) = run_session("\n\nPLACE 0,0,NORTH\n\nEXIT\n");
        assert_eq!(history.len(), 1);
    }
}
