//! Terminal presentation: report lines, the tabletop map and help text.
//!
//! Everything here builds strings; the interactive loop decides where they
//! go. Keeping rendering pure makes the output testable without a
//! terminal.

use crate::core::{Pose, Robot, Table};

/// Format a REPORT snapshot as `X,Y,FACING`.
pub fn report_line(pose: Pose) -> String {
    format!("{},{},{}", pose.position.x, pose.position.y, pose.facing)
}

/// The message shown when REPORT is issued before a valid PLACE.
pub fn missing_report_line() -> String {
    "No report available: the robot has not been placed".to_string()
}

/// ASCII view of the tabletop with the robot drawn as its facing glyph.
///
/// Rows are rendered north to south, so y grows upward on screen. The
/// header states whether the robot is on the table; the footer labels the
/// axes.
pub fn draw_map(robot: &Robot) -> String {
    let pose = robot.report();
    let mut out = String::new();

    let header = match pose {
        Some(_) => "Robot position with heading NORTH(^), SOUTH(v), WEST(<), EAST(>)",
        None => "Robot not placed yet",
    };
    out.push_str(&format!("  # # # # # # #  {header}\n"));

    for y in (0..Table::HEIGHT).rev() {
        out.push_str(&format!("{y} # "));
        for x in 0..Table::WIDTH {
            match pose.filter(|p| p.position.x == x && p.position.y == y) {
                Some(p) => {
                    out.push(p.facing.glyph());
                    out.push(' ');
                }
                None => out.push_str("  "),
            }
        }
        out.push_str("#\n");
    }

    out.push_str("Y # # # # # # #\n");
    out.push_str("  X 0 1 2 3 4\n");
    out
}

/// The command reference printed by HELP and after rejected input.
pub fn help_text() -> String {
    [
        "Valid commands:",
        "  PLACE X,Y,F  place the robot at X,Y (both 0-4) facing F",
        "               (NORTH, SOUTH, EAST or WEST)",
        "  MOVE         move one unit in the current facing",
        "  LEFT         rotate 90 degrees counter-clockwise",
        "  RIGHT        rotate 90 degrees clockwise",
        "  REPORT       print X,Y and facing of the robot",
        "  HELP         print this message",
        "  EXIT         close the simulator",
        "The X-axis points EAST, the Y-axis points NORTH.",
    ]
    .join("\n")
}
