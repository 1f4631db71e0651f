//! Feasibility solver facade
//!
//! Validates a problem against the registry and configuration, applies the
//! area pre-check, prepares search items and runs the placement search.

use std::fmt;

use crate::algorithm::bitset::CellMask;
use crate::algorithm::items::{SearchItem, encode_items, expand_items, order_items};
use crate::algorithm::problem::{Container, Problem};
use crate::algorithm::search::{PlacementChoice, PlacementSearch, SearchOutcome};
use crate::io::configuration::MAX_CONTAINER_CELLS;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::registry::{ShapeId, ShapeRegistry};

/// Pruning of permutations among interchangeable pieces
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SymmetryBreaking {
    /// Tied pieces are placed in strictly increasing (offset, orientation) order
    #[default]
    Canonical,
    /// Every piece may use every offset
    Disabled,
}

/// Order in which pieces are placed
///
/// Only affects running time; the verdict is the same for every order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ItemOrder {
    /// Largest area first, ties by ascending shape identifier
    #[default]
    AreaDescending,
    /// Shape identifier order, instances ascending
    Given,
    /// Seeded random permutation
    Shuffled(u64),
}

/// Runtime parameters for the solver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Symmetry breaking among identical pieces
    pub symmetry_breaking: SymmetryBreaking,
    /// Piece placement order
    pub item_order: ItemOrder,
    /// Maximum number of search nodes before giving up with `Unknown`
    pub node_limit: Option<u64>,
    /// Largest container area accepted
    pub max_container_cells: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            symmetry_breaking: SymmetryBreaking::default(),
            item_order: ItemOrder::default(),
            node_limit: None,
            max_container_cells: MAX_CONTAINER_CELLS,
        }
    }
}

impl SearchConfig {
    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the container capacity is zero
    pub fn validate(&self) -> Result<()> {
        if self.max_container_cells == 0 {
            return Err(invalid_parameter(
                "max_container_cells",
                &self.max_container_cells,
                &"must allow at least one cell",
            ));
        }
        Ok(())
    }
}

/// Outcome of one feasibility question
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// All pieces fit
    Feasible,
    /// No arrangement exists
    Infeasible,
    /// The node limit ran out before a verdict
    Unknown,
}

impl Verdict {
    /// True only for `Feasible`
    pub const fn is_feasible(self) -> bool {
        matches!(self, Self::Feasible)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Feasible => "feasible",
            Self::Infeasible => "infeasible",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Search effort counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of pieces in the problem
    pub items: usize,
    /// Search levels entered with a piece left to place
    pub nodes: u64,
    /// Placement masks tested against the occupancy
    pub placements_tested: u64,
    /// Whether the area pre-check decided the problem
    pub area_rejected: bool,
}

/// One piece of a feasible layout
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedPiece {
    /// Shape the piece is an instance of
    pub shape: ShapeId,
    /// 0-based ordinal among the instances of the same shape
    pub instance: usize,
    /// Index into the shape's orientation set
    pub orientation: usize,
    /// Top row of the bounding box
    pub row: usize,
    /// Left column of the bounding box
    pub col: usize,
    /// Absolute `(row, col)` cells covered
    pub cells: Vec<(usize, usize)>,
}

/// A layout proving feasibility
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    container: Container,
    pieces: Vec<PlacedPiece>,
}

impl Solution {
    fn from_trail(
        container: Container,
        items: &[SearchItem],
        trail: &[PlacementChoice],
        registry: &ShapeRegistry,
    ) -> Self {
        let pieces = items
            .iter()
            .zip(trail)
            .map(|(item, choice)| {
                let (row, col) = container.position(choice.offset);
                let cells = registry
                    .orientations(item.shape)
                    .and_then(|set| set.get(choice.orientation))
                    .map(|orientation| {
                        orientation
                            .filled_cells()
                            .map(|(dr, dc)| (row + dr, col + dc))
                            .collect()
                    })
                    .unwrap_or_default();
                PlacedPiece {
                    shape: item.shape,
                    instance: item.instance,
                    orientation: choice.orientation,
                    row,
                    col,
                    cells,
                }
            })
            .collect();

        Self { container, pieces }
    }

    /// Container the layout fills
    pub const fn container(&self) -> Container {
        self.container
    }

    /// Placed pieces in search order
    pub fn pieces(&self) -> &[PlacedPiece] {
        &self.pieces
    }

    /// Occupancy mask of the whole layout
    pub fn occupancy(&self) -> CellMask {
        let mut mask = CellMask::new(self.container.width * self.container.height);
        for &(row, col) in self.pieces.iter().flat_map(|piece| &piece.cells) {
            mask.insert(self.container.index(row, col));
        }
        mask
    }

    /// Check that every cell is inside the container and no two pieces overlap
    pub fn is_valid(&self) -> bool {
        let in_bounds = self.pieces.iter().flat_map(|piece| &piece.cells).all(
            |&(row, col)| row < self.container.height && col < self.container.width,
        );
        let covered: usize = self.pieces.iter().map(|piece| piece.cells.len()).sum();
        in_bounds && self.occupancy().count() == covered
    }
}

/// Full result of one solve
#[derive(Clone, Debug)]
pub struct SolveReport {
    /// Feasibility verdict
    pub verdict: Verdict,
    /// Total area of all requested pieces
    pub required_area: usize,
    /// Container area
    pub capacity: usize,
    /// Search effort
    pub stats: SearchStats,
    /// Layout, present only for a feasible verdict
    pub solution: Option<Solution>,
}

/// Feasibility solver bound to one shape registry
#[derive(Clone, Copy, Debug)]
pub struct Solver<'r> {
    registry: &'r ShapeRegistry,
    config: SearchConfig,
}

impl<'r> Solver<'r> {
    /// Create a solver with default configuration
    pub fn new(registry: &'r ShapeRegistry) -> Self {
        Self::with_config(registry, SearchConfig::default())
    }

    /// Create a solver with explicit configuration
    pub const fn with_config(registry: &'r ShapeRegistry, config: SearchConfig) -> Self {
        Self { registry, config }
    }

    /// Active configuration
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Decide whether every piece fits
    ///
    /// An `Unknown` verdict from a node limit counts as not feasible; use
    /// [`Self::solve_report`] to tell the two apart.
    ///
    /// # Errors
    ///
    /// Returns an error if the problem is oversized, names an unknown shape,
    /// or the configuration is invalid
    pub fn solve(&self, problem: &Problem) -> Result<bool> {
        Ok(self.solve_report(problem)?.verdict.is_feasible())
    }

    /// Solve and return verdict, statistics and layout
    ///
    /// # Errors
    ///
    /// Returns `OversizedContainer` if the container exceeds the configured
    /// capacity, `UnknownShape` if a positive count names an unregistered
    /// shape, and `InvalidParameter` for an invalid configuration
    pub fn solve_report(&self, problem: &Problem) -> Result<SolveReport> {
        self.config.validate()?;

        let container = problem.container;
        let capacity = container.cells_within(self.config.max_container_cells)?;
        let required_area = problem.required_area(self.registry)?;
        let item_count = problem.item_count();

        tracing::debug!(
            width = container.width,
            height = container.height,
            items = item_count,
            required_area,
            capacity,
            "solving problem"
        );

        if required_area > capacity {
            tracing::debug!(required_area, capacity, "rejected by area pre-check");
            return Ok(SolveReport {
                verdict: Verdict::Infeasible,
                required_area,
                capacity,
                stats: SearchStats {
                    items: item_count,
                    area_rejected: true,
                    ..SearchStats::default()
                },
                solution: None,
            });
        }

        let mut templates = expand_items(problem, self.registry)?;
        order_items(&mut templates, self.config.item_order);
        let items = encode_items(&templates, self.registry, container)?;

        let mut search = PlacementSearch::new(
            &items,
            capacity,
            self.config.symmetry_breaking,
            self.config.node_limit,
        );
        let outcome = search.run();
        let stats = search.stats();

        let (verdict, solution) = match outcome {
            SearchOutcome::Found => (
                Verdict::Feasible,
                Some(Solution::from_trail(
                    container,
                    &items,
                    search.trail(),
                    self.registry,
                )),
            ),
            SearchOutcome::Exhausted => (Verdict::Infeasible, None),
            SearchOutcome::Aborted => (Verdict::Unknown, None),
        };

        tracing::debug!(
            %verdict,
            nodes = stats.nodes,
            placements_tested = stats.placements_tested,
            "search finished"
        );

        Ok(SolveReport {
            verdict,
            required_area,
            capacity,
            stats,
            solution,
        })
    }
}

/// Decide feasibility of one problem with the default configuration
///
/// # Errors
///
/// Returns an error if the container exceeds the supported size or the
/// problem names an unregistered shape
pub fn solve(problem: &Problem, registry: &ShapeRegistry) -> Result<bool> {
    Solver::new(registry).solve(problem)
}
