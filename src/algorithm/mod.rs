/// Cell bit-sets for placement and occupancy masks
pub mod bitset;
/// Placement mask encoding for orientations inside a container
pub mod encoder;
/// Search item expansion, ordering and tie marking
pub mod items;
/// Containers and packing problems
pub mod problem;
/// Backtracking placement search
pub mod search;
/// Solver facade, configuration and reports
pub mod solver;
