//! Solver constants and runtime configuration defaults

// Placement mask capacity
/// Maximum container area (width × height) a placement mask may address
pub const MAX_CONTAINER_CELLS: usize = 4096;

/// Number of candidate grids the normalizer generates (4 rotations × 2 reflections)
pub const ORIENTATION_CANDIDATES: usize = 8;

// Puzzle text format
/// Glyph marking a filled shape cell
pub const FILLED_GLYPH: char = '#';
/// Glyph marking an empty shape cell
pub const EMPTY_GLYPH: char = '.';
/// Separator between container width and height in a region header
pub const DIMENSION_SEPARATOR: char = 'x';

// Default values for configurable parameters
/// Fixed seed used when shuffled ordering is requested without a seed
pub const DEFAULT_SEED: u64 = 42;

// Progress bar display settings
/// Width of the problem progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Minimum number of problems before a progress bar is shown
pub const MIN_PROBLEMS_FOR_PROGRESS: usize = 2;
