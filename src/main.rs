//! # queens
//!
//! `queens` enumerates every solution of the N-Queens puzzle for a board size and prints them
//! as column sequences, one bracketed group per solution, or `-1` when there is none.
//!
//! Two constraint checkers are available:
//! 1.  **Brute force**: every candidate square is compared against all queens already placed.
//! 2.  **Occupancy**: occupied columns and diagonals are tracked in bitmaps, so each check is O(1).
//!
//! Both produce exactly the same solutions in the same order.
//!
//! ## Usage
//!
//! ```sh
//! # Read the board size from standard input
//! echo 8 | queens
//!
//! # Solve a given size
//! queens 8
//! queens solve --n 8 --checker brute-force --stats
//!
//! # Check both strategies against each other
//! queens compare --n 10 --quiet
//!
//! # Shell completions
//! queens completions zsh
//! ```
//!
//! ### Common Options
//!
//! -   `-d, --debug`: Print details about the board and the search.
//! -   `--no-verify`: Skip verifying the solutions after the search.
//! -   `-s, --stats`: Print search and memory statistics.
//! -   `-q, --quiet`: Only print the timing line.
//! -   `-c, --checker <CHECKER>`: `brute-force` or `occupancy` (default: `occupancy`).
//!
//! Logging goes through `env_logger` and is enabled by setting `QUEENS_LOG`, e.g.
//! `QUEENS_LOG=debug queens 8`.

use crate::command_line::cli::{
    Cli, Commands, compare, print_completions, solve_and_report, solve_stdin,
};
use clap::Parser;
use queens_solver::queens::error::Result;

mod command_line;

/// Global allocator using `tikv-jemallocator`, which also backs the memory statistics.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    if std::env::var("QUEENS_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("QUEENS_LOG")
            .write_style("QUEENS_LOG_STYLE");
        env_logger::init_from_env(env);
    }

    let cli = Cli::parse();
    log::debug!("parsed arguments: {cli:?}");

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Dispatches to the handler of the chosen subcommand.
///
/// A bare board size solves that board; with no size and no subcommand the size is read from
/// standard input.
fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Solve { n, common }) => solve_and_report(n, &common),
        Some(Commands::Stdin { common }) => solve_stdin(&common),
        Some(Commands::Compare { n, common }) => compare(n, &common),
        Some(Commands::Completions { shell }) => {
            print_completions(shell);
            Ok(())
        }
        None => match cli.n {
            Some(n) => solve_and_report(n, &cli.common),
            None => solve_stdin(&cli.common),
        },
    }
}
