#![allow(clippy::cast_precision_loss)]

use clap::{Args, CommandFactory, Parser, Subcommand};
use queens_solver::queens::board::Solutions;
use queens_solver::queens::checker::{BruteForce, CheckerType, ConstraintChecker, Occupancy};
use queens_solver::queens::error::{QueensError, Result};
use queens_solver::queens::input::read_board_size;
use queens_solver::queens::solver::{SolutionStats, Solver, board_size};
use std::time::{Duration, Instant};
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the queens solver.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "queens", version, about = "Enumerates every N-Queens solution")]
pub(crate) struct Cli {
    /// Board size. If given without a subcommand, that board is solved.
    /// With neither a size nor a subcommand, the size is read from standard input.
    #[arg(allow_negative_numbers = true)]
    pub n: Option<i64>,

    /// Specifies the subcommand to execute (e.g. `solve`, `stdin`, `compare`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve a board of the given size.
    Solve {
        /// Board size. Sizes of zero or below have no solutions.
        #[arg(short, long, allow_negative_numbers = true)]
        n: i64,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Read the board size from standard input, then solve it.
    Stdin {
        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve with both checkers and confirm they produce the same solutions.
    Compare {
        /// Board size.
        #[arg(short, long, allow_negative_numbers = true)]
        n: i64,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct CommonOptions {
    /// Enable debug output about the board and the search.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Skip verifying the solutions after the search.
    #[arg(long, default_value_t = false)]
    pub(crate) no_verify: bool,

    /// Print search and memory statistics after solving.
    #[arg(short, long, default_value_t = false)]
    pub(crate) stats: bool,

    /// Do not print the solutions, only the timing line.
    #[arg(short, long, default_value_t = false)]
    pub(crate) quiet: bool,

    /// Constraint checking strategy.
    #[arg(short, long, default_value_t = CheckerType::Occupancy)]
    pub(crate) checker: CheckerType,
}

/// Reads the board size from standard input and solves it.
///
/// # Errors
///
/// If standard input cannot be read or holds no integer, or if verification fails.
pub(crate) fn solve_stdin(common: &CommonOptions) -> Result<()> {
    let n = read_board_size(std::io::stdin().lock())?;
    solve_and_report(n, common)
}

/// Solves an `n`-board and prints the solutions, the execution time and optionally statistics.
///
/// # Errors
///
/// If a solution fails verification.
pub(crate) fn solve_and_report(n: i64, common: &CommonOptions) -> Result<()> {
    if common.debug {
        println!("Board size: {n}");
        println!("Checker: {}", common.checker);
    }

    let (solutions, elapsed, solver_stats) = solve(n, common.checker);

    if common.debug {
        println!("Solutions: {}", solutions.len());
        println!("Time: {elapsed:?}");
    }

    if !common.no_verify {
        verify_solutions(n, &solutions, common.debug)?;
    }

    if !common.quiet {
        println!("{solutions}");
    }
    println!("Execution time: {} ms", elapsed.as_millis());

    if common.stats {
        print_stats(n, common.checker, elapsed, &solver_stats);
    }

    Ok(())
}

/// Solves an `n`-board with both checkers and compares the results.
///
/// # Errors
///
/// `CheckerMismatch` if the solution sets differ, or a verification error.
pub(crate) fn compare(n: i64, common: &CommonOptions) -> Result<()> {
    let (brute, brute_elapsed, brute_stats) = solve(n, CheckerType::BruteForce);
    let (occupancy, occupancy_elapsed, occupancy_stats) = solve(n, CheckerType::Occupancy);

    if brute != occupancy {
        return Err(QueensError::CheckerMismatch { n });
    }

    if !common.no_verify {
        verify_solutions(n, &occupancy, common.debug)?;
    }

    if !common.quiet {
        println!("{occupancy}");
    }

    print_stats(n, CheckerType::BruteForce, brute_elapsed, &brute_stats);
    print_stats(n, CheckerType::Occupancy, occupancy_elapsed, &occupancy_stats);
    println!("\nIDENTICAL ({} solutions)", occupancy.len());
    Ok(())
}

/// Writes a completion script for `shell` to standard output.
pub(crate) fn print_completions(shell: clap_complete::Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
}

/// Solves an `n`-board with the given checker.
///
/// # Returns
/// A tuple containing:
/// * `Solutions`: Every solution in discovery order, possibly empty.
/// * `Duration`: The time taken by the search.
/// * `SolutionStats`: Statistics collected during the search.
pub(crate) fn solve(n: i64, checker: CheckerType) -> (Solutions, Duration, SolutionStats) {
    let Some(size) = board_size(n) else {
        log::info!("board size {n} has no squares");
        return (Solutions::new(), Duration::ZERO, SolutionStats::default());
    };

    match checker {
        CheckerType::BruteForce => solve_impl::<BruteForce>(size),
        CheckerType::Occupancy => solve_impl::<Occupancy>(size),
    }
}

fn solve_impl<C: ConstraintChecker>(n: usize) -> (Solutions, Duration, SolutionStats) {
    let _ = epoch::advance();

    let time = Instant::now();

    let mut solver: Solver<C> = Solver::new(n);
    let solutions = solver.solve();

    let elapsed = time.elapsed();
    log::info!("n = {n}: {} solutions in {elapsed:?}", solutions.len());

    (solutions, elapsed, solver.stats())
}

/// Verifies every solution against the board rules.
///
/// # Errors
///
/// `Verification` with the first violation found.
pub(crate) fn verify_solutions(n: i64, solutions: &Solutions, debug: bool) -> Result<()> {
    let size = board_size(n).unwrap_or(0);
    solutions.verify(size)?;
    if debug {
        println!("Verified: true");
    }
    Ok(())
}

/// Reads allocated and resident memory in MiB from jemalloc.
fn memory_usage() -> Option<(f64, f64)> {
    epoch::advance().ok()?;
    let allocated_bytes = stats::allocated::mib().ok()?.read().ok()?;
    let resident_bytes = stats::resident::mib().ok()?.read().ok()?;

    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);
    Some((allocated_mib, resident_mib))
}

/// Helper function to print a single statistic line in a formatted table row.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of problem and search statistics.
pub(crate) fn print_stats(n: i64, checker: CheckerType, elapsed: Duration, s: &SolutionStats) {
    let elapsed_secs = elapsed.as_secs_f64();
    let probes_per_check = if s.checks > 0 {
        s.probes as f64 / s.checks as f64
    } else {
        0.0
    };

    println!("\n=======================[ Problem Statistics ]=========================");
    stat_line("Board size", n);
    stat_line("Checker", checker);

    println!("========================[ Search Statistics ]========================");
    stat_line("Solutions", s.solutions);
    stat_line_with_rate("Checks", s.checks, elapsed_secs);
    stat_line_with_rate("Probes", s.probes, elapsed_secs);
    stat_line_with_rate("Placements", s.placements, elapsed_secs);
    stat_line("Probes per check", format!("{probes_per_check:.2}"));
    if let Some((allocated, resident)) = memory_usage() {
        stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
        stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    }
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_size() {
        let cli = Cli::try_parse_from(["queens", "8"]).unwrap();
        assert_eq!(cli.n, Some(8));
        assert!(cli.command.is_none());
        assert_eq!(cli.common.checker, CheckerType::Occupancy);
    }

    #[test]
    fn test_parse_negative_size() {
        let cli = Cli::try_parse_from(["queens", "-3"]).unwrap();
        assert_eq!(cli.n, Some(-3));
    }

    #[test]
    fn test_parse_no_arguments() {
        let cli = Cli::try_parse_from(["queens"]).unwrap();
        assert_eq!(cli.n, None);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_solve_with_options() {
        let cli = Cli::try_parse_from([
            "queens",
            "solve",
            "--n",
            "6",
            "--checker",
            "brute-force",
            "--stats",
            "--no-verify",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Solve { n, common }) => {
                assert_eq!(n, 6);
                assert_eq!(common.checker, CheckerType::BruteForce);
                assert!(common.stats);
                assert!(common.no_verify);
                assert!(!common.quiet);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_compare() {
        let cli = Cli::try_parse_from(["queens", "compare", "-n", "5", "-q"]).unwrap();
        match cli.command {
            Some(Commands::Compare { n, common }) => {
                assert_eq!(n, 5);
                assert!(common.quiet);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_unknown_checker() {
        assert!(Cli::try_parse_from(["queens", "solve", "-n", "4", "-c", "fast"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_solve_non_positive() {
        let (solutions, elapsed, stats) = solve(0, CheckerType::BruteForce);
        assert!(solutions.is_empty());
        assert_eq!(elapsed, Duration::ZERO);
        assert_eq!(stats, SolutionStats::default());
    }

    #[test]
    fn test_solve_matches_across_checkers() {
        let (brute, _, brute_stats) = solve(6, CheckerType::BruteForce);
        let (occupancy, _, occupancy_stats) = solve(6, CheckerType::Occupancy);
        assert_eq!(brute, occupancy);
        assert_eq!(brute.len(), 4);
        assert_eq!(brute_stats.checks, occupancy_stats.checks);
    }

    #[test]
    fn test_verify_solutions_rejects_invalid() {
        let bad = Solutions::from(vec![vec![1, 2, 3, 4]]);
        assert!(matches!(
            verify_solutions(4, &bad, false),
            Err(QueensError::Verification(_))
        ));
        assert!(verify_solutions(4, &Solutions::from(vec![vec![2, 4, 1, 3]]), false).is_ok());
    }

    #[test]
    fn test_compare_and_report_succeed() {
        let common = CommonOptions {
            quiet: true,
            ..CommonOptions::default()
        };
        assert!(compare(4, &common).is_ok());
        assert!(solve_and_report(3, &common).is_ok());
        assert!(solve_and_report(-2, &common).is_ok());
    }
}
