//! Property-based tests for the robot state machine.
//!
//! These tests use proptest to verify the table invariants hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use toybot::core::{Command, Facing, Position, Robot, Table};

prop_compose! {
    fn arbitrary_facing()(variant in 0..4u8) -> Facing {
        match variant {
            0 => Facing::North,
            1 => Facing::East,
            2 => Facing::South,
            _ => Facing::West,
        }
    }
}

prop_compose! {
    fn on_table()(x in 0..Table::WIDTH, y in 0..Table::HEIGHT) -> Position {
        Position::new(x, y)
    }
}

prop_compose! {
    fn anywhere()(x in -10..15i32, y in -10..15i32) -> Position {
        Position::new(x, y)
    }
}

fn arbitrary_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (anywhere(), arbitrary_facing())
            .prop_map(|(position, facing)| Command::Place { position, facing }),
        Just(Command::Move),
        Just(Command::Left),
        Just(Command::Right),
        Just(Command::Report),
    ]
}

proptest! {
    #[test]
    fn place_then_report_roundtrips(position in on_table(), facing in arbitrary_facing()) {
        let robot = Robot::new().place(position, facing);

        let pose = robot.report().unwrap();
        prop_assert_eq!(pose.position, position);
        prop_assert_eq!(pose.facing, facing);
    }

    #[test]
    fn off_table_place_leaves_state_unchanged(
        candidate in anywhere(),
        prior in on_table(),
        facing in arbitrary_facing(),
    ) {
        prop_assume!(!Table::contains(candidate));

        // An unplaced robot stays unplaced.
        prop_assert_eq!(Robot::new().place(candidate, facing), Robot::Unplaced);

        // A placed robot keeps its prior pose.
        let placed = Robot::new().place(prior, facing);
        prop_assert_eq!(placed.place(candidate, facing), placed);
    }

    #[test]
    fn four_turns_are_identity(position in on_table(), facing in arbitrary_facing()) {
        let robot = Robot::new().place(position, facing);

        let left4 = robot.turn_left().turn_left().turn_left().turn_left();
        let right4 = robot.turn_right().turn_right().turn_right().turn_right();

        prop_assert_eq!(left4, robot);
        prop_assert_eq!(right4, robot);
    }

    #[test]
    fn turning_never_changes_position(position in on_table(), facing in arbitrary_facing()) {
        let robot = Robot::new().place(position, facing);

        prop_assert_eq!(robot.turn_left().report().unwrap().position, position);
        prop_assert_eq!(robot.turn_right().report().unwrap().position, position);
    }

    #[test]
    fn robot_never_leaves_the_table(
        commands in prop::collection::vec(arbitrary_command(), 0..40),
    ) {
        let mut robot = Robot::new();

        for command in commands {
            robot = robot.execute(command).robot;
            if let Some(pose) = robot.report() {
                prop_assert!(Table::contains(pose.position));
            }
        }
    }

    #[test]
    fn commands_on_unplaced_robot_are_noops(
        commands in prop::collection::vec(
            prop_oneof![
                Just(Command::Move),
                Just(Command::Left),
                Just(Command::Right),
                Just(Command::Report),
            ],
            1..20,
        ),
    ) {
        let mut robot = Robot::new();

        for command in commands {
            let outcome = robot.execute(command);
            prop_assert_eq!(outcome.robot, Robot::Unplaced);
            prop_assert_eq!(outcome.report, None);
            robot = outcome.robot;
        }
    }

    #[test]
    fn report_never_mutates(
        commands in prop::collection::vec(arbitrary_command(), 0..20),
    ) {
        let mut robot = Robot::new();
        for command in commands {
            robot = robot.execute(command).robot;
        }

        let before = robot;
        let _ = robot.execute(Command::Report);
        prop_assert_eq!(robot, before);
    }

    #[test]
    fn advance_moves_at_most_one_cell(position in on_table(), facing in arbitrary_facing()) {
        let robot = Robot::new().place(position, facing);
        let after = robot.advance().report().unwrap().position;

        let distance = (after.x - position.x).abs() + (after.y - position.y).abs();
        prop_assert!(distance <= 1);
    }
}
