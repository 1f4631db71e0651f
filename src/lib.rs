//! Exact feasibility solver for packing polyominoes into rectangular containers
//!
//! Shapes are expanded once into their distinct rotations and reflections,
//! encoded as cell bit-masks for each container, and placed by a depth-first
//! backtracking search with an area pre-check and symmetry breaking among
//! identical pieces.

#![forbid(unsafe_code)]

/// Placement encoding, item preparation and the backtracking search
pub mod algorithm;
/// Puzzle loading, command-line front end and error handling
pub mod io;
/// Shape grids, orientations and the shape registry
pub mod spatial;

pub use algorithm::problem::{Container, Problem};
pub use algorithm::solver::{
    ItemOrder, SearchConfig, SolveReport, Solver, SymmetryBreaking, Verdict, solve,
};
pub use io::error::{PackingError, Result};
pub use spatial::{OrientationSet, Shape, ShapeId, ShapeRegistry};
