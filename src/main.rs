//! Interactive toy robot simulator.
//!
//! Reads commands from standard input and renders the tabletop to
//! standard output. Logging goes to standard error; set `RUST_LOG` to
//! adjust verbosity.

use std::io;
use toybot::repl;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging() {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "toybot=info".parse() {
        filter = filter.add_directive(directive);
    }

    fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn main() -> io::Result<()> {
    init_logging();

    info!("Welcome to the toy robot simulator!");
    info!("Place a robot with a 1x1 footprint on the 5x5 tabletop and move it around.");
    info!("The robot has to be placed on the table before it can be moved.");
    info!("The tabletop's X-axis points EAST, the Y-axis points NORTH. Good luck!");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let history = repl::run(stdin.lock(), &mut stdout.lock())?;

    info!(commands = history.len(), "goodbye");
    Ok(())
}
