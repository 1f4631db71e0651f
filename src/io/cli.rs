//! Command-line interface for solving puzzle files

use crate::algorithm::solver::{ItemOrder, SearchConfig, Solver, SymmetryBreaking};
use crate::io::configuration::DEFAULT_SEED;
use crate::io::error::{Result, file_system, invalid_parameter};
use crate::io::progress::{ProgressManager, VerdictTally};
use crate::io::puzzle::Puzzle;
use clap::{ArgAction, Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Piece ordering accepted on the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Largest pieces first
    #[default]
    Area,
    /// Shape identifier order
    Given,
    /// Seeded random order
    Shuffled,
}

#[derive(Parser, Debug)]
#[command(name = "polypack")]
#[command(
    author,
    version,
    about = "Decide which regions of a puzzle can hold all of their polyominoes"
)]
/// Command-line arguments for the packing solver
pub struct Cli {
    /// Puzzle file with shapes and regions
    #[arg(value_name = "PUZZLE")]
    pub puzzle: PathBuf,

    /// Disable symmetry breaking between identical pieces
    #[arg(long)]
    pub no_symmetry: bool,

    /// Order in which pieces are placed
    #[arg(long, value_enum, default_value_t = OrderArg::Area)]
    pub order: OrderArg,

    /// Seed for shuffled ordering
    #[arg(long)]
    pub seed: Option<u64>,

    /// Give up on a region after this many search nodes
    #[arg(long)]
    pub node_limit: Option<u64>,

    /// Print one verdict line per region
    #[arg(short, long)]
    pub details: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Translate flags into solver configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a seed is given without shuffled ordering
    pub fn search_config(&self) -> Result<SearchConfig> {
        let item_order = match (self.order, self.seed) {
            (OrderArg::Area, None) => ItemOrder::AreaDescending,
            (OrderArg::Given, None) => ItemOrder::Given,
            (OrderArg::Shuffled, seed) => ItemOrder::Shuffled(seed.unwrap_or(DEFAULT_SEED)),
            (_, Some(seed)) => {
                return Err(invalid_parameter(
                    "seed",
                    &seed,
                    &"only used with --order shuffled",
                ));
            }
        };

        let symmetry_breaking = if self.no_symmetry {
            SymmetryBreaking::Disabled
        } else {
            SymmetryBreaking::Canonical
        };

        Ok(SearchConfig {
            symmetry_breaking,
            item_order,
            node_limit: self.node_limit,
            ..SearchConfig::default()
        })
    }

    /// Default log filter for the chosen verbosity
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Loads a puzzle, solves every region and writes the report
pub struct PuzzleRunner {
    cli: Cli,
}

impl PuzzleRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Solve every region and write verdicts and a summary to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the flags are inconsistent, the puzzle cannot be
    /// loaded, a region is invalid, or the report cannot be written
    pub fn run<W: Write>(&self, out: &mut W) -> Result<VerdictTally> {
        let config = self.cli.search_config()?;
        let puzzle = Puzzle::from_file(&self.cli.puzzle)?;
        let solver = Solver::with_config(puzzle.registry(), config);

        let mut progress =
            ProgressManager::new(puzzle.problems().len(), self.cli.should_show_progress());
        let start_time = Instant::now();

        for (index, problem) in puzzle.problems().iter().enumerate() {
            let report = solver.solve_report(problem)?;
            progress.complete_problem(report.verdict);

            if self.cli.details {
                writeln!(
                    out,
                    "{index}: {}x{} {}",
                    problem.container.width, problem.container.height, report.verdict
                )
                .map_err(|source| file_system("<output>", "write report", source))?;
            }
        }

        progress.finish();
        let tally = progress.tally();

        tracing::info!(
            regions = tally.total(),
            feasible = tally.feasible,
            elapsed_ms = start_time.elapsed().as_millis(),
            "puzzle solved"
        );

        write_summary(out, tally)
            .map_err(|source| file_system("<output>", "write summary", source))?;

        Ok(tally)
    }
}

fn write_summary<W: Write>(out: &mut W, tally: VerdictTally) -> std::io::Result<()> {
    if tally.unknown > 0 {
        writeln!(
            out,
            "{}/{} regions fit ({} unknown)",
            tally.feasible,
            tally.total(),
            tally.unknown
        )
    } else {
        writeln!(out, "{}/{} regions fit", tally.feasible, tally.total())
    }
}
